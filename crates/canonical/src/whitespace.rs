//! Whitespace normalization utilities.
//!
//! [`normalize`](crate::normalize) deliberately keeps interior whitespace
//! untouched, since matching only ever looks at tokens. Display and log paths
//! that want a tidy single-line string use [`collapse_whitespace`] instead.

/// Collapses repeated whitespace, trims edges, and turns newlines into single
/// spaces.
///
/// # Examples
///
/// ```rust
/// use canonical::collapse_whitespace;
///
/// assert_eq!(collapse_whitespace("  hello   world  "), "hello world");
/// assert_eq!(collapse_whitespace("hello\r\nworld"), "hello world");
/// assert_eq!(collapse_whitespace("   \n\t   "), "");
/// ```
pub fn collapse_whitespace(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for segment in text.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.push_str(segment);
    }
    normalized
}
