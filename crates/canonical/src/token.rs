use std::collections::HashSet;

/// Whitespace-delimited words of `text` as a set; a repeated word counts once.
///
/// This is the unit of overlap scoring: the score between a query and a stored
/// question is the size of the intersection of their token sets.
///
/// ```rust
/// use canonical::token_set;
///
/// let set = token_set("what is what");
/// assert_eq!(set.len(), 2);
/// assert!(set.contains("what"));
/// ```
pub fn token_set(text: &str) -> HashSet<&str> {
    text.split_whitespace().collect()
}
