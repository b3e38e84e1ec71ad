//! Canned replies and how one of them gets picked.
//!
//! Greetings and fallbacks choose uniformly among equally valid strings. The
//! choice goes through a [`ReplySelector`] so tests and reproducible sessions
//! can pin it down with [`FixedSelector`] or a seeded [`RandomSelector`].

use std::sync::Mutex;

/// Returned for empty or whitespace-only input.
pub const EMPTY_INPUT_REPLY: &str = "Please say something.";

/// Returned for an exit phrase.
pub const FAREWELL_REPLY: &str = "Bye!";

/// Substrings of normalized input that count as a greeting.
pub const GREETING_TRIGGERS: [&str; 6] = [
    "hello",
    "hi",
    "hey",
    "good morning",
    "good afternoon",
    "good evening",
];

pub const GREETING_REPLIES: [&str; 3] = ["Hello!", "Hi there!", "Hey — how can I help?"];

/// Normalized inputs that end the conversation.
pub const EXIT_PHRASES: [&str; 4] = ["exit", "quit", "bye", "goodbye"];

pub const FALLBACK_REPLIES: [&str; 3] = [
    "Sorry, I don't know that. Can you rephrase?",
    "I'm not sure — try asking in a different way.",
    "I don't have an answer for that right now.",
];

/// Picks one of several equally valid replies.
pub trait ReplySelector: Send + Sync {
    /// Index in `0..len`. `len` is never zero.
    fn pick(&self, len: usize) -> usize;

    /// Picks one option. Out-of-range picks are clamped to the last option.
    fn choose<'a>(&self, options: &[&'a str]) -> &'a str {
        match options.len() {
            0 => "",
            len => options[self.pick(len).min(len - 1)],
        }
    }
}

/// Uniform random choice backed by `fastrand`.
#[derive(Debug)]
pub struct RandomSelector {
    rng: Mutex<fastrand::Rng>,
}

impl RandomSelector {
    /// Seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::new()),
        }
    }

    /// Deterministic sequence of picks for a given seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(fastrand::Rng::with_seed(seed)),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl ReplySelector for RandomSelector {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self
            .rng
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.usize(..len)
    }
}

/// Always picks the same index (clamped to the available options).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedSelector(pub usize);

impl ReplySelector for FixedSelector {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_selector_clamps() {
        assert_eq!(FixedSelector(0).choose(&GREETING_REPLIES), "Hello!");
        assert_eq!(FixedSelector(1).choose(&GREETING_REPLIES), "Hi there!");
        assert_eq!(
            FixedSelector(99).choose(&GREETING_REPLIES),
            "Hey — how can I help?"
        );
    }

    #[test]
    fn random_selector_stays_in_range() {
        let selector = RandomSelector::new();
        for _ in 0..200 {
            assert!(selector.pick(3) < 3);
        }
        assert_eq!(selector.pick(1), 0);
    }

    #[test]
    fn seeded_selectors_agree() {
        let a = RandomSelector::with_seed(7);
        let b = RandomSelector::with_seed(7);
        let picks_a: Vec<usize> = (0..32).map(|_| a.pick(3)).collect();
        let picks_b: Vec<usize> = (0..32).map(|_| b.pick(3)).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn random_selector_reaches_every_option() {
        let selector = RandomSelector::with_seed(42);
        let mut seen = [false; 3];
        for _ in 0..500 {
            seen[selector.pick(3)] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn canned_sets_are_not_empty() {
        assert!(FALLBACK_REPLIES.len() >= 3);
        assert!(!GREETING_REPLIES.is_empty());
    }
}
