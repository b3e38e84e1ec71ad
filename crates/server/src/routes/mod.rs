//! API route handlers
//!
//! - `message`: the chat endpoint
//! - `page`: the HTML chat page
//! - `health`: liveness, readiness and reply counters

pub mod health;
pub mod message;
pub mod page;

use crate::error::ServerError;

/// 404 Not Found handler
pub async fn not_found() -> ServerError {
    ServerError::NotFound
}
