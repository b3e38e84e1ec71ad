use std::collections::HashSet;

use canonical::token_set;
use knowledge::KnowledgeBase;
use tracing::debug;

use crate::similarity::close_match;
use crate::types::{MatchConfig, MatchError, MatchHit, MatchKind};


/// Knowledge lookup over an immutable [`KnowledgeBase`].
///
/// Lookup runs three stages in order and stops at the first one that finds
/// something:
///
/// 1. exact: the normalized query is a stored question;
/// 2. overlap: the stored question sharing the most distinct tokens with the
///    query, first in load order on ties, provided at least one token is shared;
/// 3. fuzzy: the stored question with the highest normalized edit
///    similarity, if it reaches [`MatchConfig::fuzzy_cutoff`].
///
/// `Matcher` is `Send + Sync` and holds no interior mutability, so a single
/// instance can serve any number of concurrent callers by reference.
#[derive(Debug, Clone)]
pub struct Matcher {
    kb: KnowledgeBase,
    /// Token set of every stored question, aligned with `kb` load order.
    question_tokens: Vec<HashSet<String>>,
    config: MatchConfig,
}

impl Matcher {
    /// Construct a matcher with the default configuration.
    pub fn new(kb: KnowledgeBase) -> Self {
        Self::build(kb, MatchConfig::default())
    }

    /// Construct a matcher with an explicit configuration.
    pub fn with_config(kb: KnowledgeBase, config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self::build(kb, config))
    }

    fn build(kb: KnowledgeBase, config: MatchConfig) -> Self {
        let question_tokens = kb
            .questions()
            .map(|q| token_set(q).into_iter().map(str::to_owned).collect())
            .collect();
        Self {
            kb,
            question_tokens,
            config,
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.kb
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Answer for already-normalized text, or `None` when no stage matched.
    pub fn best_kb_match(&self, text: &str) -> Option<&str> {
        self.best_match(text).map(|hit| hit.answer)
    }

    /// Like [`best_kb_match`](Self::best_kb_match) but reports which stored
    /// question matched and how.
    pub fn best_match(&self, text: &str) -> Option<MatchHit<'_>> {
        if let Some(hit) = self.exact_match(text) {
            return Some(hit);
        }
        if let Some(hit) = self.overlap_match(text) {
            return Some(hit);
        }
        let hit = if self.config.fuzzy_enabled {
            self.fuzzy_match(text)
        } else {
            None
        };
        if hit.is_none() {
            debug!(query = %text, "no_match");
        }
        hit
    }

    fn exact_match(&self, text: &str) -> Option<MatchHit<'_>> {
        let (question, answer) = self.kb.get_entry(text)?;
        debug!(query = %text, "exact_match");
        Some(MatchHit {
            question,
            answer,
            kind: MatchKind::Exact,
        })
    }

    fn overlap_match(&self, text: &str) -> Option<MatchHit<'_>> {
        let query_tokens = token_set(text);
        if query_tokens.is_empty() {
            return None;
        }

        let mut best: Option<(usize, usize)> = None;
        for (idx, tokens) in self.question_tokens.iter().enumerate() {
            let score = query_tokens
                .iter()
                .filter(|token| tokens.contains(**token))
                .count();
            // Strictly greater: the first entry to reach the maximum keeps it.
            if score > best.map_or(0, |(_, s)| s) {
                best = Some((idx, score));
            }
        }

        let (idx, score) = best?;
        let (question, answer) = self.kb.get_index(idx)?;
        debug!(query = %text, question = %question, score, "overlap_match");
        Some(MatchHit {
            question,
            answer,
            kind: MatchKind::Overlap { score },
        })
    }

    fn fuzzy_match(&self, text: &str) -> Option<MatchHit<'_>> {
        let (idx, ratio) = close_match(text, self.kb.questions(), self.config.fuzzy_cutoff)?;
        let (question, answer) = self.kb.get_index(idx)?;
        debug!(query = %text, question = %question, ratio, "fuzzy_match");
        Some(MatchHit {
            question,
            answer,
            kind: MatchKind::Fuzzy { ratio },
        })
    }
}
