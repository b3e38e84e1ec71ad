//! Reply instrumentation.
//!
//! A front-end attaches a [`MatchMetrics`] to its own [`Responder`] with
//! [`Responder::with_metrics`]; every
//! [`respond_detailed`](crate::Responder::respond_detailed) call on that
//! instance then reports the rule that produced its reply and how long the
//! pipeline took. Responders without a recorder record nothing.
//!
//! [`Responder`]: crate::Responder
//! [`Responder::with_metrics`]: crate::Responder::with_metrics

use std::time::Duration;

use crate::responder::ReplyKind;

/// Observer for reply generation.
pub trait MatchMetrics: Send + Sync {
    /// Called once per reply with the rule that fired and the time spent.
    fn record_reply(&self, kind: &ReplyKind, latency: Duration);
}
