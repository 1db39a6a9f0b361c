//! The deployment-planning pipeline: discover, scope, build, deploy.
mod builder;
pub use builder::{PINGER_COMMAND, build_service_definition};

mod composer;
pub use composer::{Composer, Plan, RunOutcome};

mod deployer;
pub use deployer::{CreatedService, DeployReport, deploy};

mod discovery;
pub use discovery::{Discovered, discover_networks, discover_nodes, filter_networks, filter_nodes};

mod transform;
pub use transform::{ScopedNames, scope_env, scope_network};
