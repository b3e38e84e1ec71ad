//! String similarity for the fuzzy fallback.
//!
//! Scores are normalized Levenshtein similarity from [`strsim`]:
//!
//! ```text
//! ratio = 1 - edits / max(len(a), len(b))
//! ```
//!
//! on a 0.0–1.0 scale, 1.0 meaning identical. Lengths are in `char`s.

use strsim::normalized_levenshtein;

/// Similarity ratio between two strings.
///
/// ```rust
/// use matcher::similarity::ratio;
///
/// assert_eq!(ratio("abcd", "abcd"), 1.0);
/// assert_eq!(ratio("abcd", "abxd"), 0.75);
/// assert_eq!(ratio("abc", "xyz"), 0.0);
/// ```
pub fn ratio(a: &str, b: &str) -> f64 {
    normalized_levenshtein(a, b)
}

/// Upper bound on [`ratio`] from lengths alone: at least `|la - lb|` edits
/// are always needed.
fn length_bound(la: usize, lb: usize) -> f64 {
    let longest = la.max(lb);
    if longest == 0 {
        return 1.0;
    }
    la.min(lb) as f64 / longest as f64
}

/// Best candidate whose similarity to `query` is at least `cutoff`.
///
/// Returns the candidate's position in `candidates` and its ratio. When two
/// candidates tie on the best ratio, the earlier one is kept. An empty
/// candidate list simply yields `None`.
pub fn close_match<'a, I>(query: &str, candidates: I, cutoff: f64) -> Option<(usize, f64)>
where
    I: IntoIterator<Item = &'a str>,
{
    let query_len = query.chars().count();
    let mut best: Option<(usize, f64)> = None;

    for (idx, candidate) in candidates.into_iter().enumerate() {
        let floor = best.map_or(cutoff, |(_, r)| r);
        if length_bound(query_len, candidate.chars().count()) < floor {
            continue;
        }
        let score = ratio(query, candidate);
        if score < cutoff {
            continue;
        }
        match best {
            Some((_, best_score)) if score <= best_score => {}
            _ => best = Some((idx, score)),
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_and_disjoint() {
        assert_eq!(ratio("hello", "hello"), 1.0);
        assert_eq!(ratio("abc", "xyz"), 0.0);
        assert_eq!(ratio("", ""), 1.0);
        assert_eq!(ratio("abc", ""), 0.0);
    }

    #[test]
    fn known_ratios() {
        assert_eq!(ratio("abxy", "abcd"), 0.5);
        // One deleted char out of seventeen.
        assert!((ratio("what is yur name", "what is your name") - 16.0 / 17.0).abs() < 1e-12);
        // Three missing spaces out of fourteen chars.
        assert!((ratio("tellmeajoke", "tell me a joke") - 11.0 / 14.0).abs() < 1e-12);
    }

    #[test]
    fn counts_chars_not_bytes() {
        assert_eq!(ratio("héllo", "héllo"), 1.0);
        assert_eq!(ratio("é", "e"), 0.0);
    }

    #[test]
    fn length_bound_never_undercuts_ratio() {
        let pairs = [
            ("what is your name", "whats your name"),
            ("abcdef", "fedcba"),
            ("tell me a joke", "tell me a story"),
            ("", "abc"),
        ];
        for (a, b) in pairs {
            let bound = length_bound(a.chars().count(), b.chars().count());
            assert!(bound >= ratio(a, b), "bound below ratio for {a:?}/{b:?}");
        }
    }

    #[test]
    fn close_match_respects_cutoff() {
        let candidates = ["how are you", "what is your name", "tell me a joke"];
        let hit = close_match("what is yur name", candidates, 0.72);
        assert_eq!(hit.map(|(idx, _)| idx), Some(1));

        assert!(close_match("completely unrelated", candidates, 0.72).is_none());
    }

    #[test]
    fn close_match_tie_keeps_first_candidate() {
        // "abcx" and "abcy" are equally close to "abcz".
        let hit = close_match("abcz", ["abcx", "abcy"], 0.5).unwrap();
        assert_eq!(hit, (0, 0.75));
    }

    #[test]
    fn close_match_picks_highest_ratio() {
        let hit = close_match("abcdef", ["abcxxx", "abcdex", "abcdef"], 0.4).unwrap();
        assert_eq!(hit, (2, 1.0));
    }

    #[test]
    fn close_match_empty_candidates() {
        let none: [&str; 0] = [];
        assert!(close_match("anything", none, 0.72).is_none());
    }

    #[test]
    fn threshold_boundary_is_inclusive() {
        let accepted_candidate = format!("{}{}", "a".repeat(72), "b".repeat(28));
        let accepted_query = format!("{}{}", "a".repeat(72), "c".repeat(28));
        assert_eq!(ratio(&accepted_query, &accepted_candidate), 0.72);
        assert!(close_match(&accepted_query, [accepted_candidate.as_str()], 0.72).is_some());

        let rejected_candidate = format!("{}{}", "a".repeat(71), "b".repeat(29));
        let rejected_query = format!("{}{}", "a".repeat(71), "c".repeat(29));
        assert_eq!(ratio(&rejected_query, &rejected_candidate), 0.71);
        assert!(close_match(&rejected_query, [rejected_candidate.as_str()], 0.72).is_none());
    }
}
