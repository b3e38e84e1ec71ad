use crate::config::ServerConfig;
use dashmap::DashMap;
use matcher::{MatchMetrics, ReplyKind, Responder};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Shared application state
///
/// Built once at startup. The responder is immutable apart from its random
/// selector, so every request borrows the same instance.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Arc<ServerConfig>,

    /// Display name used by the chat page
    pub bot_name: Arc<str>,

    /// Reply pipeline shared across requests
    pub responder: Arc<Responder>,

    /// Counts every reply the responder above produces
    pub replies: Arc<ReplyCounters>,
}

impl ServerState {
    /// Takes ownership of the responder and attaches this state's
    /// [`ReplyCounters`] to it, so `/metrics` reflects exactly the replies
    /// served through this state.
    pub fn new(config: ServerConfig, bot_name: impl Into<Arc<str>>, responder: Responder) -> Self {
        let replies = Arc::new(ReplyCounters::default());
        let responder = responder.with_metrics(replies.clone());
        Self {
            config: Arc::new(config),
            bot_name: bot_name.into(),
            responder: Arc::new(responder),
            replies,
        }
    }

    /// Number of stored questions behind the responder.
    pub fn knowledge_entries(&self) -> usize {
        self.responder.matcher().knowledge().len()
    }
}

/// Per-kind reply counts and cumulative latency.
#[derive(Debug, Default)]
pub struct ReplyCounters {
    by_kind: DashMap<&'static str, u64>,
    total: AtomicU64,
    latency_micros: AtomicU64,
}

/// Point-in-time copy of [`ReplyCounters`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplySnapshot {
    pub total: u64,
    pub mean_latency_micros: u64,
    pub by_kind: BTreeMap<&'static str, u64>,
}

impl ReplyCounters {
    pub fn snapshot(&self) -> ReplySnapshot {
        let total = self.total.load(Ordering::Relaxed);
        let latency = self.latency_micros.load(Ordering::Relaxed);
        ReplySnapshot {
            total,
            mean_latency_micros: latency.checked_div(total).unwrap_or(0),
            by_kind: self
                .by_kind
                .iter()
                .map(|entry| (*entry.key(), *entry.value()))
                .collect(),
        }
    }
}

impl MatchMetrics for ReplyCounters {
    fn record_reply(&self, kind: &ReplyKind, latency: Duration) {
        *self.by_kind.entry(kind.label()).or_insert(0) += 1;
        self.total.fetch_add(1, Ordering::Relaxed);
        let micros = u64::try_from(latency.as_micros()).unwrap_or(u64::MAX);
        self.latency_micros.fetch_add(micros, Ordering::Relaxed);
    }
}
