//! Scoping of a base environment to one network.
//!
//! The same stack/service template is deployed once per overlay network, so
//! the stack name and the service name are made unique by embedding the
//! network name:
//!
//! - `STACK_NAME` becomes `<stack>_<network>`;
//! - `SERVICE_SPEC_NAME` is added as `<stack>_<network>_<service>`;
//! - `SERVICE_NAME` and everything else stay as they are.
//!
//! Applying the transform twice to the same copy compounds the suffix
//! (`app_net-a_net-a`); callers transform each copy exactly once.
use composer_model::{Env, EnvSet, KEY_SERVICE_NAME, KEY_SERVICE_SPEC_NAME, KEY_STACK_NAME};
use tracing::trace;

/// Names derived for one network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScopedNames {
    pub stack_name: String,
    pub service_spec_name: String,
}

/// Rewrite `env` in place for `network` and return the derived names.
///
/// Missing keys contribute empty strings.
pub fn scope_env(env: &mut Env, network: &str) -> ScopedNames {
    let stack = env.value_or_empty(KEY_STACK_NAME);
    let service = env.value_or_empty(KEY_SERVICE_NAME);

    let stack_name = format!("{stack}_{network}");
    let service_spec_name = format!("{stack_name}_{service}");

    env.set(KEY_STACK_NAME, stack_name.as_str());
    env.set(KEY_SERVICE_SPEC_NAME, service_spec_name.as_str());

    trace!(%network, %stack_name, %service_spec_name, "environment scoped to network");
    ScopedNames {
        stack_name,
        service_spec_name,
    }
}

/// Scope the copy stored for `network`; `None` if the set has no such copy.
pub fn scope_network(envs: &mut EnvSet, network: &str) -> Option<ScopedNames> {
    envs.get_mut(network).map(|env| scope_env(env, network))
}
