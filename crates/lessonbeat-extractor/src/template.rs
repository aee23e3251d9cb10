//! Template recognition and multi-plan splitting

use crate::matching::split_ignore_ascii_case;

/// Marker phrase that opens every plan in the template family
pub const PLAN_MARKER: &str = "daily lesson plan";

/// Split extracted text into plan bodies
///
/// Each occurrence of [`PLAN_MARKER`] (ASCII case-insensitive) starts a new
/// plan. Text before the first marker is template preamble and is dropped,
/// so K pieces yield K-1 bodies. Text without the marker yields none.
///
/// # Examples
///
/// ```
/// use lessonbeat_extractor::split_plans;
///
/// assert!(split_plans("just a memo").is_empty());
/// assert_eq!(split_plans("header Daily Lesson Plan body").len(), 1);
/// ```
pub fn split_plans(text: &str) -> Vec<&str> {
    let mut pieces = split_ignore_ascii_case(text, PLAN_MARKER);
    if pieces.len() < 2 {
        return Vec::new();
    }
    pieces.remove(0);
    pieces
}

/// Filename of the `index`-th plan (0-based) of a file
///
/// The first plan keeps the base name; later plans append their index.
pub fn plan_filename(base: &str, index: usize) -> String {
    if index == 0 {
        base.to_string()
    } else {
        format!("{}{}", base, index)
    }
}
