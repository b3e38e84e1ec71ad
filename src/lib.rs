//! highxbot: a rule-based conversational responder.
//!
//! This crate stitches the workspace layers into one entry point:
//!
//! - `canonical` normalizes text,
//! - `knowledge` loads the `question|answer` file,
//! - `matcher` looks answers up and runs the reply pipeline.
//!
//! On top it adds the YAML [`BotConfig`], the console front-end and, behind
//! the `server` feature, the HTTP front-end.
//!
//! ```
//! use highxbot::{BotConfig, FixedSelector, build_responder_with_selector};
//!
//! let mut config = BotConfig::default();
//! config.knowledge.path = "does/not/exist.txt".into();
//!
//! // A missing knowledge file is an empty knowledge base, not an error.
//! let bot = build_responder_with_selector(&config, FixedSelector(0)).unwrap();
//! assert_eq!(bot.respond(""), "Please say something.");
//! assert_eq!(bot.respond("bye"), "Bye!");
//! assert_eq!(bot.respond("7"), "You entered a number: 7");
//! ```

pub mod config;
pub mod console;

pub use canonical::{collapse_whitespace, is_numeric, normalize, token_set};
pub use config::{BotConfig, ConfigLoadError, ConsoleYamlConfig, KnowledgeYamlConfig};
pub use knowledge::{
    KnowledgeBase, KnowledgeEntry, KnowledgeError, LoadStats, load_knowledge,
    load_knowledge_with_stats, parse_knowledge,
};
pub use matcher::{
    FixedSelector, MatchConfig, MatchError, MatchHit, MatchKind, Matcher, RandomSelector, Reply,
    ReplyKind, ReplySelector, Responder, is_exit_phrase,
};

use std::path::Path;

use thiserror::Error;
use tracing::info;

/// Errors from assembling a bot.
#[derive(Debug, Error)]
pub enum BotError {
    #[error(transparent)]
    Knowledge(#[from] KnowledgeError),

    #[error(transparent)]
    Config(#[from] ConfigLoadError),

    #[error(transparent)]
    Match(#[from] MatchError),

    #[error("web front-end unavailable: {0}")]
    WebUnavailable(&'static str),
}

/// Load a config file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<BotConfig, BotError> {
    match path {
        Some(path) => Ok(BotConfig::from_file(path)?),
        None => Ok(BotConfig::default()),
    }
}

/// Build a responder from `config` with an entropy-seeded selector.
pub fn build_responder(config: &BotConfig) -> Result<Responder, BotError> {
    build_responder_with_selector(config, RandomSelector::new())
}

/// Build a responder from `config` with an explicit reply selector.
///
/// Loads the knowledge file named by the config; a missing file yields an
/// empty knowledge base.
pub fn build_responder_with_selector<S: ReplySelector>(
    config: &BotConfig,
    selector: S,
) -> Result<Responder<S>, BotError> {
    let (kb, stats) = load_knowledge_with_stats(&config.knowledge.path)?;
    let matcher = Matcher::with_config(kb, config.matcher)?;
    info!(
        bot = %config.name,
        entries = matcher.knowledge().len(),
        skipped = stats.skipped(),
        fuzzy_cutoff = config.matcher.fuzzy_cutoff,
        fuzzy_enabled = config.matcher.fuzzy_enabled,
        "responder_ready"
    );
    Ok(Responder::with_selector(matcher, selector))
}

/// Whether the HTTP front-end can run in this build.
///
/// Checked once at startup. When unavailable, no router or server type is
/// ever constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WebCapability {
    Available,
    Unavailable { reason: &'static str },
}

impl WebCapability {
    #[cfg(feature = "server")]
    pub fn detect() -> Self {
        WebCapability::Available
    }

    #[cfg(not(feature = "server"))]
    pub fn detect() -> Self {
        WebCapability::Unavailable {
            reason: "highxbot was built without the `server` feature",
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, WebCapability::Available)
    }

    /// `Ok` when available, otherwise [`BotError::WebUnavailable`].
    pub fn require(self) -> Result<(), BotError> {
        match self {
            WebCapability::Available => Ok(()),
            WebCapability::Unavailable { reason } => Err(BotError::WebUnavailable(reason)),
        }
    }
}
