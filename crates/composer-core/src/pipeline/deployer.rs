use std::time::Instant;

use composer_model::{ServiceDefinition, ServiceId};
use tracing::{info, instrument};

use crate::{error::CoreError, metrics::MetricsHandle, platform::Platform};

/// Confirmation for one created service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedService {
    pub name: String,
    pub network: String,
    pub id: ServiceId,
}

/// Services created by a run, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeployReport {
    pub created: Vec<CreatedService>,
}

impl DeployReport {
    pub fn len(&self) -> usize {
        self.created.len()
    }

    pub fn is_empty(&self) -> bool {
        self.created.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.created.iter().map(|c| c.name.as_str())
    }
}

/// Create every service in order, stopping at the first failure.
///
/// Services created before the failure are left in place.
#[instrument(level = "debug", skip_all, fields(platform = platform.name(), services = worklist.len()))]
pub async fn deploy<P: Platform + ?Sized>(
    platform: &P,
    worklist: Vec<ServiceDefinition>,
    metrics: &MetricsHandle,
) -> Result<DeployReport, CoreError> {
    let mut report = DeployReport::default();

    for def in worklist {
        let started = Instant::now();
        let id = match platform.create_service(&def).await {
            Ok(id) => id,
            Err(source) => {
                return Err(CoreError::Deployment {
                    service: def.name,
                    source,
                });
            }
        };
        metrics.record_service_created(started.elapsed().as_millis() as u64);
        info!(service = %def.name, network = %def.network, %id, "created service");

        report.created.push(CreatedService {
            name: def.name,
            network: def.network,
            id,
        });
    }
    Ok(report)
}
