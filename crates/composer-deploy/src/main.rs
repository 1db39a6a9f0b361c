use std::{path::PathBuf, sync::Arc};

use anyhow::Context;
use tracing::{error, info, warn};

use composer_core::{
    Composer, CoreError, MetricsBackend, ProcessEnv, ResolvedConfig, RunOutcome, Stage,
};
use composer_exec::docker::{DockerConfig, DockerPlatform};
use composer_model::{Env, load_env_file, source::DEFAULT_ENV_FILE};
use composer_observe::{LoggerConfig, init_local_offset, init_logger};
use composer_prometheus::PrometheusMetrics;

const KEY_ENV_FILE: &str = "COMPOSER_ENV_FILE";
const KEY_METRICS_FILE: &str = "COMPOSER_METRICS_FILE";

fn main() -> anyhow::Result<()> {
    // Offset detection needs a single-threaded process.
    init_local_offset();

    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?
        .block_on(run())
}

async fn run() -> anyhow::Result<()> {
    // 1) logger
    let log_cfg = LoggerConfig::from_env()?;
    init_logger(&log_cfg)?;

    // 2) base environment
    let env_file = env_path(KEY_ENV_FILE).unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));
    let base = load_env_file(&env_file)?;
    info!(path = %env_file.display(), keys = base.len(), "environment loaded");

    // 3) metrics + run
    let metrics = PrometheusMetrics::new()?;
    let outcome = compose(&base, &metrics).await;

    if let Some(path) = env_path(KEY_METRICS_FILE) {
        if let Err(e) = metrics.write_textfile(&path) {
            warn!(error = %e, "metrics not written");
        }
    }

    match outcome {
        Ok(RunOutcome::Deployed(report)) => {
            for svc in &report.created {
                println!("created service: {} ({})", svc.name, svc.id);
            }
            Ok(())
        }
        Ok(RunOutcome::Planned(plan)) => {
            for def in &plan.worklist {
                println!(
                    "planned service: {} network={} replicas={}",
                    def.name, def.network, def.replicas
                );
            }
            Ok(())
        }
        Err(e) => {
            error!(stage = e.stage().as_label(), error = %e, "composer run failed");
            Err(e.into())
        }
    }
}

/// Resolve settings, then run the pipeline against the docker platform.
async fn compose(base: &Env, metrics: &PrometheusMetrics) -> Result<RunOutcome, CoreError> {
    let settings = ResolvedConfig::resolve(base)
        .and_then(|config| Ok((config, DockerConfig::from_source(&ProcessEnv)?)));
    let (config, docker) = match settings {
        Ok(settings) => settings,
        Err(e) => {
            metrics.record_failure(Stage::Config);
            return Err(e.into());
        }
    };

    Composer::new(DockerPlatform::new(docker), config)
        .with_metrics(Arc::new(metrics.clone()))
        .run(base)
        .await
}

fn env_path(key: &str) -> Option<PathBuf> {
    std::env::var_os(key)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}
