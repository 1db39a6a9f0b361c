//! Prometheus metrics backend for composer runs.
//!
//! [`PrometheusMetrics`] implements [`composer_core::MetricsBackend`]. A run is
//! a short-lived process, so there is no scrape endpoint: the binary renders
//! the registry once the run ends and writes it where a node-exporter
//! textfile collector picks it up.
//!
//! ```rust
//! use std::sync::Arc;
//! use composer_core::{MetricsBackend, Stage};
//! use composer_prometheus::PrometheusMetrics;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let metrics = PrometheusMetrics::new()?;
//! let handle: Arc<dyn MetricsBackend> = Arc::new(metrics.clone());
//! handle.record_discovered(Stage::Networks, 4, 2);
//!
//! let text = metrics.render_text()?;
//! assert!(text.contains("composer_eligible"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Metrics
//! - `composer_listed{stage}` gauge: resources the platform listed
//! - `composer_eligible{stage}` gauge: resources kept after filtering
//! - `composer_services_planned` gauge
//! - `composer_services_created_total` counter
//! - `composer_service_create_seconds` histogram
//! - `composer_failures_total{stage}` counter
mod backend;
pub use backend::PrometheusMetrics;

mod error;
pub use error::MetricsError;

pub use prometheus::{Encoder, Registry, TextEncoder};
