//! highxbot Server - HTTP front-end for the highxbot reply pipeline
//!
//! Exposes one [`matcher::Responder`] over HTTP. The responder is built by
//! the caller and handed in through [`ServerState`]; the server never loads
//! knowledge itself.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use matcher::{Matcher, Responder};
//! use server::{ServerConfig, ServerState};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::load()?;
//!     let responder = Responder::new(Matcher::new(Default::default()));
//!     let state = ServerState::new(config, "highxbot", responder);
//!     server::start_server(Arc::new(state)).await
//! }
//! ```
//!
//! # API Endpoints
//!
//! - `GET /` - HTML chat page
//! - `POST /api/message` - `{"message": "..."}` (JSON or form) to `{"reply": "..."}`;
//!   a missing or empty message gets `400 {"error": "no message provided"}`
//! - `GET /health` - Liveness probe
//! - `GET /ready` - Readiness probe with knowledge size
//! - `GET /metrics` - Reply counts by pipeline rule
//!
//! # Configuration
//!
//! [`ServerConfig::load`] reads an optional `server.{yaml,toml,json}` file and
//! `HIGHXBOT_SERVER__*` environment variables, e.g. `HIGHXBOT_SERVER__PORT=8080`.

pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use config::ServerConfig;
pub use error::ServerError;
pub use server::{build_router, init_tracing, start_server};
pub use state::{ReplyCounters, ReplySnapshot, ServerState};
