//! Metrics collection abstraction for planning runs.
//!
//! Backends (prometheus, statsd, etc) implement [`MetricsBackend`] and are injected into [`crate::Composer`].
mod backend;
pub use backend::{MetricsBackend, MetricsHandle, Stage};

mod noop;
pub use noop::NoOpMetrics;

use std::sync::Arc;

/// Create a no-op metrics handle.
#[inline]
pub fn noop_metrics() -> MetricsHandle {
    Arc::new(NoOpMetrics)
}
