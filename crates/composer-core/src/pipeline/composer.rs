use composer_model::{Env, EnvSet, ServiceDefinition};
use tracing::{debug, info, instrument, warn};

use crate::{
    config::ResolvedConfig,
    error::CoreError,
    metrics::{MetricsHandle, Stage, noop_metrics},
    pipeline::{
        builder::build_service_definition,
        deployer::{DeployReport, deploy},
        discovery::{discover_networks, discover_nodes},
        transform::scope_env,
    },
    platform::Platform,
};

/// Worklist planned for one run, with the discovery results it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    /// Eligible networks, in platform order.
    pub networks: Vec<String>,
    /// Eligible node hostnames; their count is the replica count.
    pub nodes: Vec<String>,
    /// One definition per network, in network order.
    pub worklist: Vec<ServiceDefinition>,
}

impl Plan {
    pub fn replicas(&self) -> u64 {
        self.nodes.len() as u64
    }
}

/// Result of [`Composer::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Every planned service was created.
    Deployed(DeployReport),
    /// Dry run: the plan was built and nothing was created.
    Planned(Plan),
}

/// Deployment-planning pipeline bound to one platform handle.
///
/// Stages run strictly in sequence: network discovery, node discovery,
/// per-network transform and build, then deployment. The first error aborts
/// the run.
pub struct Composer<P> {
    platform: P,
    config: ResolvedConfig,
    metrics: MetricsHandle,
}

impl<P: Platform> Composer<P> {
    pub fn new(platform: P, config: ResolvedConfig) -> Self {
        Self {
            platform,
            config,
            metrics: noop_metrics(),
        }
    }

    /// Replace the metrics backend.
    pub fn with_metrics(mut self, metrics: MetricsHandle) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    /// Discover targets and build the worklist without touching the platform's services.
    #[instrument(level = "debug", skip_all, fields(platform = self.platform.name()))]
    pub async fn plan(&self, base: &Env) -> Result<Plan, CoreError> {
        self.try_plan(base).await.inspect_err(|e| self.fail(e))
    }

    /// Plan, then create every service unless this is a dry run.
    #[instrument(level = "debug", skip_all, fields(platform = self.platform.name()))]
    pub async fn run(&self, base: &Env) -> Result<RunOutcome, CoreError> {
        let plan = self.plan(base).await?;

        if self.config.dry_run {
            for def in &plan.worklist {
                info!(service = %def.name, network = %def.network, replicas = def.replicas, "dry run: service planned");
            }
            return Ok(RunOutcome::Planned(plan));
        }

        let report = deploy(&self.platform, plan.worklist, &self.metrics)
            .await
            .inspect_err(|e| self.fail(e))?;
        info!(created = report.len(), "deployment finished");
        Ok(RunOutcome::Deployed(report))
    }

    async fn try_plan(&self, base: &Env) -> Result<Plan, CoreError> {
        let networks = discover_networks(&self.platform, &self.config.avoid_networks).await?;
        self.metrics
            .record_discovered(Stage::Networks, networks.listed, networks.len());
        if networks.is_empty() {
            return Err(CoreError::EmptyResult(Stage::Networks));
        }

        let nodes = discover_nodes(&self.platform, self.config.avoid_masters).await?;
        self.metrics
            .record_discovered(Stage::Nodes, nodes.listed, nodes.len());
        if nodes.is_empty() {
            return Err(CoreError::EmptyResult(Stage::Nodes));
        }

        let replicas = nodes.len() as u64;
        let mut envs = EnvSet::replicate(base, networks.names.iter().map(String::as_str));

        let mut worklist = Vec::with_capacity(envs.len());
        for (network, env) in envs.iter_mut() {
            let names = scope_env(env, network);
            debug!(%network, service = %names.service_spec_name, replicas, "service planned");
            worklist.push(build_service_definition(env, replicas, network));
        }
        self.metrics.record_planned(worklist.len());

        Ok(Plan {
            networks: networks.names,
            nodes: nodes.names,
            worklist,
        })
    }

    fn fail(&self, err: &CoreError) {
        warn!(stage = err.stage().as_label(), error = %err, "run aborted");
        self.metrics.record_failure(err.stage());
    }
}
