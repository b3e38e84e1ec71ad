use indexmap::IndexMap;

use crate::entry::KnowledgeEntry;

/// Loaded mapping from normalized question to answer.
///
/// Iteration follows load order. When the same normalized question appears
/// more than once, the answer of the last occurrence is kept at the position
/// of the first one.
///
/// The base is built once and never mutated afterwards; there is no public
/// insertion API. Sharing one instance between threads needs no locking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnowledgeBase {
    entries: IndexMap<String, String>,
}

impl KnowledgeBase {
    /// An empty knowledge base.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a knowledge base from raw `(question, answer)` pairs.
    ///
    /// Questions go through the same normalization as loaded lines; pairs
    /// whose question normalizes to nothing are dropped.
    pub fn from_pairs<I, Q, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: AsRef<str>,
        A: AsRef<str>,
    {
        pairs
            .into_iter()
            .filter_map(|(q, a)| KnowledgeEntry::new(q.as_ref(), a.as_ref()))
            .collect()
    }

    /// Inserts an entry, returning the replaced answer on a duplicate key.
    pub(crate) fn insert(&mut self, entry: KnowledgeEntry) -> Option<String> {
        let (question, answer) = entry.into_parts();
        debug_assert!(!question.is_empty());
        self.entries.insert(question, answer)
    }

    /// Answer stored under an already-normalized question.
    pub fn get(&self, question: &str) -> Option<&str> {
        self.entries.get(question).map(String::as_str)
    }

    /// Stored `(question, answer)` pair for an already-normalized question.
    pub fn get_entry(&self, question: &str) -> Option<(&str, &str)> {
        self.entries
            .get_key_value(question)
            .map(|(q, a)| (q.as_str(), a.as_str()))
    }

    /// `(question, answer)` pair at a load-order position.
    pub fn get_index(&self, index: usize) -> Option<(&str, &str)> {
        self.entries
            .get_index(index)
            .map(|(q, a)| (q.as_str(), a.as_str()))
    }

    pub fn contains(&self, question: &str) -> bool {
        self.entries.contains_key(question)
    }

    /// `(question, answer)` pairs in load order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> + '_ {
        self.entries.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }

    /// Normalized questions in load order.
    pub fn questions(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<KnowledgeEntry> for KnowledgeBase {
    fn from_iter<T: IntoIterator<Item = KnowledgeEntry>>(iter: T) -> Self {
        let mut kb = KnowledgeBase::new();
        for entry in iter {
            kb.insert(entry);
        }
        kb
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_pairs_normalizes_keys() {
        let kb = KnowledgeBase::from_pairs([("What is Rust?", "A language."), ("???", "dropped")]);
        assert_eq!(kb.len(), 1);
        assert_eq!(kb.get("what is rust"), Some("A language."));
        assert!(!kb.contains("What is Rust?"));
    }

    #[test]
    fn collected_entries_are_reachable_by_normalized_query() {
        let kb: KnowledgeBase = [
            KnowledgeEntry::new("What Is Rust?", "A language."),
            KnowledgeEntry::new("!!!", "dropped"),
        ]
        .into_iter()
        .flatten()
        .collect();
        let questions: Vec<&str> = kb.questions().collect();
        assert_eq!(questions, vec!["what is rust"]);
        assert_eq!(kb.get(&canonical::normalize("what is RUST")), Some("A language."));
    }

    #[test]
    fn duplicate_keeps_first_position_and_last_answer() {
        let kb = KnowledgeBase::from_pairs([
            ("alpha", "first"),
            ("beta", "b"),
            ("Alpha!", "second"),
        ]);
        let pairs: Vec<(&str, &str)> = kb.iter().collect();
        assert_eq!(pairs, vec![("alpha", "second"), ("beta", "b")]);
    }

    #[test]
    fn questions_follow_load_order() {
        let kb = KnowledgeBase::from_pairs([("c", "3"), ("a", "1"), ("b", "2")]);
        let questions: Vec<&str> = kb.questions().collect();
        assert_eq!(questions, vec!["c", "a", "b"]);
    }

    #[test]
    fn entry_lookups() {
        let kb = KnowledgeBase::from_pairs([("first", "1"), ("second", "2")]);
        assert_eq!(kb.get_entry("second"), Some(("second", "2")));
        assert_eq!(kb.get_entry("third"), None);
        assert_eq!(kb.get_index(0), Some(("first", "1")));
        assert_eq!(kb.get_index(2), None);
    }

    #[test]
    fn empty_base() {
        let kb = KnowledgeBase::new();
        assert!(kb.is_empty());
        assert_eq!(kb.get(""), None);
        assert_eq!(kb.iter().count(), 0);
    }
}
