//! # highxbot matcher (`matcher`)
//!
//! ## Purpose
//!
//! `matcher` turns one line of user input into one reply. It sits on top of
//! `canonical` (text normalization) and `knowledge` (the loaded question/answer
//! table) and owns two layers:
//!
//! - [`Matcher`]: knowledge lookup over normalized text, in three stages:
//!   exact key, best token overlap, then fuzzy edit-distance similarity with a
//!   cutoff (0.72 by default).
//! - [`Responder`]: the full reply pipeline. Greetings and exit phrases are
//!   recognized first, then knowledge lookup, then a numeric echo, and finally
//!   a canned fallback.
//!
//! ## Core Types
//!
//! - [`MatchConfig`]: fuzzy cutoff and whether the fuzzy stage runs at all.
//! - [`MatchHit`] / [`MatchKind`]: which stored question answered and how.
//! - [`Reply`] / [`ReplyKind`]: reply text plus the pipeline rule behind it.
//! - [`ReplySelector`]: how one of several canned replies gets picked.
//!   [`RandomSelector`] is the default, [`FixedSelector`] pins the choice.
//!
//! ## Example Usage
//!
//! ```
//! use knowledge::parse_knowledge;
//! use matcher::{FixedSelector, Matcher, Responder};
//!
//! let kb = parse_knowledge("what is your name|I am highxbot.\ntell me a joke|No.");
//! let bot = Responder::with_selector(Matcher::new(kb), FixedSelector(0));
//!
//! assert_eq!(bot.respond("What is your name?"), "I am highxbot.");
//! assert_eq!(bot.respond("tellmeajoke"), "No.");
//! assert_eq!(bot.respond("123"), "You entered a number: 123");
//! assert_eq!(bot.respond("bye"), "Bye!");
//! ```
//!
//! ## Concurrency
//!
//! Both [`Matcher`] and [`Responder`] are `Send + Sync`. The knowledge base is
//! never mutated after construction; the only shared mutable state is the
//! random selector's generator, which sits behind a mutex.
//!
//! ## Metrics
//!
//! Attach a [`MatchMetrics`] implementation with [`Responder::with_metrics`] to
//! observe which rule produced each reply and how long it took.

pub mod engine;
pub mod metrics;
pub mod replies;
pub mod responder;
pub mod similarity;
pub mod types;

pub use crate::engine::Matcher;
pub use crate::metrics::MatchMetrics;
pub use crate::replies::{
    FixedSelector, RandomSelector, ReplySelector, EMPTY_INPUT_REPLY, EXIT_PHRASES,
    FALLBACK_REPLIES, FAREWELL_REPLY, GREETING_REPLIES, GREETING_TRIGGERS,
};
pub use crate::responder::{is_exit_phrase, Reply, ReplyKind, Responder};
pub use crate::types::{MatchConfig, MatchError, MatchHit, MatchKind, DEFAULT_FUZZY_CUTOFF};
