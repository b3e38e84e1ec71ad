//! highxbot knowledge layer.
//!
//! Knowledge lives in a plain UTF-8 text resource, one `question|answer`
//! record per line. This crate turns that resource into an immutable,
//! load-ordered [`KnowledgeBase`] keyed by normalized question.
//!
//! ## Format
//!
//! ```text
//! what is your name|I am highxbot.
//! how are you|Doing well, thanks!
//! ```
//!
//! - Only the first `|` separates question from answer.
//! - Blank lines, lines without `|`, and lines whose question normalizes to
//!   nothing are skipped silently.
//! - Questions go through [`canonical::normalize`], the same function used on
//!   queries. Answers are trimmed and kept verbatim.
//! - A later duplicate question replaces the earlier answer.
//!
//! ## Missing resources
//!
//! A knowledge file that does not exist yields an empty knowledge base, not an
//! error. Only real read failures (permissions, directories, invalid UTF-8)
//! surface as [`KnowledgeError`].
//!
//! ## Example
//!
//! ```
//! use knowledge::parse_knowledge;
//!
//! let kb = parse_knowledge("What is your name?|I am highxbot.\nnot a record\n");
//! assert_eq!(kb.len(), 1);
//! assert_eq!(kb.get("what is your name"), Some("I am highxbot."));
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use std::time::Instant;

use tracing::{debug, info, warn};

mod base;
mod entry;
mod error;
mod parse;

pub use crate::base::KnowledgeBase;
pub use crate::entry::{KnowledgeEntry, DELIMITER};
pub use crate::error::KnowledgeError;
pub use crate::parse::{parse_knowledge, parse_knowledge_with_stats, LoadStats};

/// Loads a knowledge resource from disk.
///
/// A path that does not exist produces an empty knowledge base.
pub fn load_knowledge(path: impl AsRef<Path>) -> Result<KnowledgeBase, KnowledgeError> {
    load_knowledge_with_stats(path).map(|(kb, _)| kb)
}

/// Loads a knowledge resource from disk and reports parse statistics.
pub fn load_knowledge_with_stats(
    path: impl AsRef<Path>,
) -> Result<(KnowledgeBase, LoadStats), KnowledgeError> {
    let path = path.as_ref();
    let start = Instant::now();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "knowledge_missing");
            return Ok((KnowledgeBase::new(), LoadStats::default()));
        }
        Err(source) => {
            return Err(KnowledgeError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let text = String::from_utf8(bytes).map_err(|err| KnowledgeError::InvalidUtf8 {
        path: path.to_path_buf(),
        valid_up_to: err.utf8_error().valid_up_to(),
    })?;

    let (kb, stats) = parse_knowledge_with_stats(&text);
    info!(
        path = %path.display(),
        entries = stats.entries,
        elapsed_micros = start.elapsed().as_micros(),
        "knowledge_loaded"
    );
    debug!(
        lines = stats.lines,
        skipped_blank = stats.skipped_blank,
        skipped_no_delimiter = stats.skipped_no_delimiter,
        skipped_empty_question = stats.skipped_empty_question,
        duplicates = stats.duplicates,
        "knowledge_load_stats"
    );
    Ok((kb, stats))
}
