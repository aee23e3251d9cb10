//! Item normalization
//!
//! Cleans a single extracted list item: enumeration prefixes, boilerplate
//! qualifiers, and known synonyms.

use crate::matching::{find_ignore_ascii_case, strip_suffix_ignore_ascii_case};

/// Phrases collapsed to a canonical short form (case-insensitive match)
pub const SYNONYMS: &[(&str, &str)] = &[("jesus christ", "Christ")];

/// Trailing qualifiers dropped from the end of an item
const TRAILING_QUALIFIERS: &[&str] = &["(all)", "who"];

/// Clean one list item
///
/// Strips numbered-list markers and stray separators, drops a trailing
/// `(all)` or `who` qualifier, and applies the synonym table. The pass is
/// repeated until the output stops changing, so the result is a fixed point:
/// `clean(&clean(s)) == clean(s)` for every `s`.
///
/// A trailing `.` is kept; it ends a sentence rather than numbering a list.
///
/// # Examples
///
/// ```
/// use lessonbeat_extractor::clean;
///
/// assert_eq!(clean("2. Think critically. (all)"), "Think critically.");
/// assert_eq!(clean("4. Know Jesus Christ"), "Know Christ");
/// assert_eq!(clean(" ;: "), "");
/// ```
pub fn clean(item: &str) -> String {
    let mut current = clean_once(item);
    loop {
        let next = clean_once(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

/// One pass of the pipeline; every step only ever shortens the string
fn clean_once(item: &str) -> String {
    let mut text = item
        .trim_start_matches(is_leading_noise)
        .trim_end_matches(is_trailing_noise)
        .trim();

    for qualifier in TRAILING_QUALIFIERS {
        text = strip_qualifier(text, qualifier).trim();
    }

    apply_synonyms(text)
}

fn is_leading_noise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | ',' | ';' | ':' | ' ')
}

fn is_trailing_noise(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, ',' | ';' | ':' | ' ')
}

/// Drop `qualifier` from the end of `text`
///
/// Alphabetic qualifiers must stand as their own word ("who", not "somewho").
fn strip_qualifier<'a>(text: &'a str, qualifier: &str) -> &'a str {
    let Some(rest) = strip_suffix_ignore_ascii_case(text, qualifier) else {
        return text;
    };

    let needs_boundary = qualifier.starts_with(|c: char| c.is_alphanumeric());
    let at_boundary = rest
        .chars()
        .next_back()
        .map_or(true, |c| !c.is_alphanumeric());

    if needs_boundary && !at_boundary {
        text
    } else {
        rest
    }
}

/// Replace the first occurrence of each synonym phrase
fn apply_synonyms(text: &str) -> String {
    let mut out = text.to_string();
    for (phrase, canonical) in SYNONYMS {
        if let Some(idx) = find_ignore_ascii_case(&out, phrase) {
            out.replace_range(idx..idx + phrase.len(), canonical);
        }
    }
    out
}
