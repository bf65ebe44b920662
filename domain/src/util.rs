//! Shared utility functions.

/// Truncate a string to at most `max_chars` characters, appending `...`
/// when anything was cut.
///
/// Question texts are mostly Portuguese, so truncation counts characters
/// rather than bytes to avoid splitting accented letters.
pub fn truncate_chars(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => format!("{}...", &s[..end]),
        None => s.to_string(),
    }
}
