use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading a knowledge resource.
///
/// A missing file is not one of them: [`load_knowledge`](crate::load_knowledge)
/// returns an empty knowledge base in that case. Malformed lines are not errors
/// either, they are skipped and counted in [`LoadStats`](crate::LoadStats).
#[derive(Debug, Error)]
pub enum KnowledgeError {
    #[error("failed to read knowledge file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("knowledge file {path} is not valid UTF-8 (at byte {valid_up_to})")]
    InvalidUtf8 { path: PathBuf, valid_up_to: usize },
}
