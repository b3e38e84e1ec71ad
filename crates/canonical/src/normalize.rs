/// Normalizes raw text for knowledge lookup.
///
/// Lower-cases the input, drops every character that is not an ASCII
/// lowercase letter, an ASCII digit or whitespace, then trims the edges.
/// Interior whitespace runs are preserved as-is; tokenization splits on them
/// anyway.
///
/// The same function is applied to stored questions and to incoming queries,
/// so a query that differs from a stored question only in case or
/// punctuation normalizes to the stored key.
///
/// # Examples
///
/// ```rust
/// use canonical::normalize;
///
/// assert_eq!(normalize("What is your name?"), "what is your name");
/// assert_eq!(normalize("  C'est   DÉJÀ vu!  "), "cest   dj vu");
/// assert_eq!(normalize("!!!"), "");
/// ```
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for ch in text.chars().flat_map(char::to_lowercase) {
        if is_retained(ch) {
            normalized.push(ch);
        }
    }

    let trimmed = normalized.trim();
    if trimmed.len() == normalized.len() {
        normalized
    } else {
        trimmed.to_string()
    }
}

/// Returns true when `text` is non-empty and made only of ASCII digits.
///
/// Intended for normalized text, where `"42"` survives but `"4.2"` has
/// already become `"42"`.
pub fn is_numeric(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

#[inline]
fn is_retained(ch: char) -> bool {
    ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch.is_whitespace()
}
