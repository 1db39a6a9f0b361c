use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use prometheus::{
    Encoder, Histogram, HistogramOpts, IntCounter, IntCounterVec, IntGauge, IntGaugeVec, Opts,
    Registry, TextEncoder, proto::MetricFamily,
};

use composer_core::{MetricsBackend, Stage};

use crate::MetricsError;

const NAMESPACE: &str = "composer";

/// Prometheus backend.
///
/// Label values are [`Stage`] labels, so cardinality stays fixed.
#[derive(Clone)]
pub struct PrometheusMetrics {
    listed: IntGaugeVec,
    eligible: IntGaugeVec,
    planned: IntGauge,
    created: IntCounter,
    create_duration: Histogram,
    failures: IntCounterVec,
    registry: Arc<Registry>,
}

impl PrometheusMetrics {
    pub fn new_with_registry(registry: Arc<Registry>) -> Result<Self, prometheus::Error> {
        let listed = IntGaugeVec::new(
            Opts::new("listed", "Resources reported by the platform").namespace(NAMESPACE),
            &["stage"],
        )?;
        registry.register(Box::new(listed.clone()))?;

        let eligible = IntGaugeVec::new(
            Opts::new("eligible", "Resources kept after filtering").namespace(NAMESPACE),
            &["stage"],
        )?;
        registry.register(Box::new(eligible.clone()))?;

        let planned = IntGauge::with_opts(
            Opts::new("services_planned", "Service definitions built").namespace(NAMESPACE),
        )?;
        registry.register(Box::new(planned.clone()))?;

        let created = IntCounter::with_opts(
            Opts::new("services_created_total", "Services created on the platform")
                .namespace(NAMESPACE),
        )?;
        registry.register(Box::new(created.clone()))?;

        let create_duration = Histogram::with_opts(
            HistogramOpts::new(
                "service_create_seconds",
                "Duration of a single create-service call",
            )
            .namespace(NAMESPACE)
            .buckets(vec![0.05, 0.1, 0.25, 0.5, 1.0, 2.5, 5.0, 10.0, 30.0]),
        )?;
        registry.register(Box::new(create_duration.clone()))?;

        let failures = IntCounterVec::new(
            Opts::new("failures_total", "Runs aborted, by stage").namespace(NAMESPACE),
            &["stage"],
        )?;
        registry.register(Box::new(failures.clone()))?;

        Ok(Self {
            listed,
            eligible,
            planned,
            created,
            create_duration,
            failures,
            registry,
        })
    }

    pub fn new() -> Result<Self, prometheus::Error> {
        Self::new_with_registry(Arc::new(Registry::new()))
    }

    pub fn gather(&self) -> Vec<MetricFamily> {
        self.registry.gather()
    }

    pub fn registry(&self) -> &Arc<Registry> {
        &self.registry
    }

    /// Text exposition of every registered metric.
    pub fn render_text(&self) -> Result<String, MetricsError> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.gather(), &mut buf)?;
        Ok(String::from_utf8(buf)?)
    }

    /// Write the text exposition to `path`.
    ///
    /// The content goes to a sibling `.tmp` file first and is renamed into
    /// place, so collectors never read a partial file.
    pub fn write_textfile(&self, path: impl AsRef<Path>) -> Result<(), MetricsError> {
        let path = path.as_ref();
        let text = self.render_text()?;

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);

        fs::write(&tmp, text).map_err(|source| MetricsError::Write {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, path).map_err(|source| MetricsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl MetricsBackend for PrometheusMetrics {
    fn record_discovered(&self, stage: Stage, listed: usize, eligible: usize) {
        self.listed
            .with_label_values(&[stage.as_label()])
            .set(listed as i64);
        self.eligible
            .with_label_values(&[stage.as_label()])
            .set(eligible as i64);
    }

    fn record_planned(&self, services: usize) {
        self.planned.set(services as i64);
    }

    fn record_service_created(&self, duration_ms: u64) {
        self.created.inc();
        self.create_duration.observe(duration_ms as f64 / 1000.0);
    }

    fn record_failure(&self, stage: Stage) {
        self.failures.with_label_values(&[stage.as_label()]).inc();
    }
}
