use crate::metrics::backend::{MetricsBackend, Stage};

/// No-op metrics backend that compiles to nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpMetrics;

impl MetricsBackend for NoOpMetrics {
    #[inline(always)]
    fn record_discovered(&self, _: Stage, _: usize, _: usize) {}

    #[inline(always)]
    fn record_planned(&self, _: usize) {}

    #[inline(always)]
    fn record_service_created(&self, _: u64) {}

    #[inline(always)]
    fn record_failure(&self, _: Stage) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn noop_metrics_is_zero_size() {
        assert_eq!(std::mem::size_of::<NoOpMetrics>(), 0);
    }

    #[test]
    fn stage_labels_are_stable() {
        let labels: Vec<_> = [Stage::Config, Stage::Networks, Stage::Nodes, Stage::Deploy]
            .iter()
            .map(Stage::as_label)
            .collect();
        assert_eq!(labels, vec!["config", "networks", "nodes", "deploy"]);
    }
}
