//! ASCII case-insensitive string matching
//!
//! Template labels are ASCII, so folding only ASCII letters keeps byte offsets
//! identical between the folded copy and the original text.

/// Byte offset of the first case-insensitive occurrence of `needle`
pub(crate) fn find_ignore_ascii_case(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    haystack
        .to_ascii_lowercase()
        .find(&needle.to_ascii_lowercase())
}

/// True if `haystack` contains `needle`, ignoring ASCII case
pub(crate) fn contains_ignore_ascii_case(haystack: &str, needle: &str) -> bool {
    find_ignore_ascii_case(haystack, needle).is_some()
}

/// Split on every case-insensitive occurrence of a non-empty `needle`
pub(crate) fn split_ignore_ascii_case<'a>(haystack: &'a str, needle: &str) -> Vec<&'a str> {
    if needle.is_empty() {
        return vec![haystack];
    }

    let folded = haystack.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();

    let mut pieces = Vec::new();
    let mut start = 0;
    for (idx, _) in folded.match_indices(&needle) {
        pieces.push(&haystack[start..idx]);
        start = idx + needle.len();
    }
    pieces.push(&haystack[start..]);
    pieces
}

/// If `line` starts with `prefix` (ignoring ASCII case), return the rest
pub(crate) fn strip_prefix_ignore_ascii_case<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    let head = line.as_bytes().get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix.as_bytes()) {
        line.get(prefix.len()..)
    } else {
        None
    }
}

/// If `line` ends with `suffix` (ignoring ASCII case), return the rest
pub(crate) fn strip_suffix_ignore_ascii_case<'a>(line: &'a str, suffix: &str) -> Option<&'a str> {
    let split = line.len().checked_sub(suffix.len())?;
    let tail = line.as_bytes().get(split..)?;
    if tail.eq_ignore_ascii_case(suffix.as_bytes()) {
        line.get(..split)
    } else {
        None
    }
}
