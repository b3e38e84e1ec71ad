use std::fmt;
use std::sync::Arc;
use std::time::Instant;

use canonical::{collapse_whitespace, is_numeric, normalize};
use serde::Serialize;
use tracing::debug;

use crate::engine::Matcher;
use crate::metrics::MatchMetrics;
use crate::replies::{
    RandomSelector, ReplySelector, EMPTY_INPUT_REPLY, EXIT_PHRASES, FALLBACK_REPLIES,
    FAREWELL_REPLY, GREETING_REPLIES, GREETING_TRIGGERS,
};
use crate::types::MatchKind;

/// Which rule of the reply pipeline produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplyKind {
    EmptyInput,
    Greeting,
    Farewell,
    Knowledge { stage: MatchKind },
    Number,
    Fallback,
}

impl ReplyKind {
    /// Short stable label for logs and metrics.
    pub fn label(&self) -> &'static str {
        match self {
            ReplyKind::EmptyInput => "empty_input",
            ReplyKind::Greeting => "greeting",
            ReplyKind::Farewell => "farewell",
            ReplyKind::Knowledge { stage } => match stage {
                MatchKind::Exact => "knowledge_exact",
                MatchKind::Overlap { .. } => "knowledge_overlap",
                MatchKind::Fuzzy { .. } => "knowledge_fuzzy",
            },
            ReplyKind::Number => "number",
            ReplyKind::Fallback => "fallback",
        }
    }
}

/// A reply together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reply {
    pub text: String,
    pub kind: ReplyKind,
}

/// True when raw input, lower-cased and trimmed, is an exit phrase.
///
/// Front-ends use this to end a session. Unlike the reply pipeline it does not
/// strip punctuation, so `"bye!"` gets a farewell reply but does not end the
/// session on its own.
pub fn is_exit_phrase(raw: &str) -> bool {
    let lowered = raw.trim().to_lowercase();
    EXIT_PHRASES.contains(&lowered.as_str())
}

/// Maps one turn of user input to a reply.
///
/// Rules, first match wins:
///
/// 1. empty or whitespace-only input: [`EMPTY_INPUT_REPLY`];
/// 2. normalized input containing a greeting trigger as a substring: a random
///    greeting (substring, so `"this"` and `"they"` count too);
/// 3. normalized input equal to an exit phrase: [`FAREWELL_REPLY`];
/// 4. a non-empty knowledge answer from the [`Matcher`];
/// 5. normalized input made only of digits: `"You entered a number: …"`;
/// 6. a random fallback.
///
/// No input makes this fail.
pub struct Responder<S = RandomSelector> {
    matcher: Matcher,
    selector: S,
    metrics: Option<Arc<dyn MatchMetrics>>,
}

impl<S: fmt::Debug> fmt::Debug for Responder<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Responder")
            .field("matcher", &self.matcher)
            .field("selector", &self.selector)
            .field("metrics", &self.metrics.is_some())
            .finish()
    }
}

impl Responder<RandomSelector> {
    /// Responder with an entropy-seeded random selector.
    pub fn new(matcher: Matcher) -> Self {
        Self::with_selector(matcher, RandomSelector::new())
    }
}

impl<S: ReplySelector> Responder<S> {
    pub fn with_selector(matcher: Matcher, selector: S) -> Self {
        Self {
            matcher,
            selector,
            metrics: None,
        }
    }

    /// Report every reply of this responder to `recorder`, replacing any
    /// recorder attached before.
    pub fn with_metrics(mut self, recorder: Arc<dyn MatchMetrics>) -> Self {
        self.metrics = Some(recorder);
        self
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Reply text for one turn of raw user input.
    pub fn respond(&self, raw: &str) -> String {
        self.respond_detailed(raw).text
    }

    /// Reply text plus the rule that produced it.
    pub fn respond_detailed(&self, raw: &str) -> Reply {
        let start = Instant::now();
        let reply = self.reply_for(raw);
        let latency = start.elapsed();

        debug!(
            input = %collapse_whitespace(raw),
            kind = reply.kind.label(),
            latency_micros = latency.as_micros(),
            "reply"
        );
        if let Some(recorder) = &self.metrics {
            recorder.record_reply(&reply.kind, latency);
        }
        reply
    }

    fn reply_for(&self, raw: &str) -> Reply {
        if raw.trim().is_empty() {
            return Reply {
                text: EMPTY_INPUT_REPLY.to_string(),
                kind: ReplyKind::EmptyInput,
            };
        }

        let text = normalize(raw);

        if GREETING_TRIGGERS.iter().any(|g| text.contains(g)) {
            return Reply {
                text: self.selector.choose(&GREETING_REPLIES).to_string(),
                kind: ReplyKind::Greeting,
            };
        }

        if EXIT_PHRASES.contains(&text.as_str()) {
            return Reply {
                text: FAREWELL_REPLY.to_string(),
                kind: ReplyKind::Farewell,
            };
        }

        if let Some(hit) = self.matcher.best_match(&text) {
            // An empty stored answer counts as no answer.
            if !hit.answer.is_empty() {
                return Reply {
                    text: hit.answer.to_string(),
                    kind: ReplyKind::Knowledge { stage: hit.kind },
                };
            }
        }

        if is_numeric(&text) {
            return Reply {
                text: format!("You entered a number: {text}"),
                kind: ReplyKind::Number,
            };
        }

        Reply {
            text: self.selector.choose(&FALLBACK_REPLIES).to_string(),
            kind: ReplyKind::Fallback,
        }
    }
}
