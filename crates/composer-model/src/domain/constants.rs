//! Well-known keys and values shared by the planning pipeline.

/// Base stack name; rewritten per network to `<stack>_<network>`.
pub const KEY_STACK_NAME: &str = "STACK_NAME";

/// Service name; kept as-is and used as the network alias.
pub const KEY_SERVICE_NAME: &str = "SERVICE_NAME";

/// Container image of the deployed service.
pub const KEY_IMAGE: &str = "IMAGE";

/// Derived entry holding the final service name, `<stack>_<network>_<service>`.
pub const KEY_SERVICE_SPEC_NAME: &str = "SERVICE_SPEC_NAME";

/// Comma-separated network names that never receive a service.
pub const KEY_AVOID_NETWORKS: &str = "AVOID_NETWORKS";

/// Integer switch; `0` makes manager nodes count towards replicas.
pub const KEY_AVOID_MASTERS: &str = "AVOID_MASTERS";

/// Network driver eligible for deployment.
pub const DRIVER_OVERLAY: &str = "overlay";

/// Service label carrying the image.
pub const LABEL_STACK_IMAGE: &str = "stack.image";

/// Service label carrying the per-network stack name.
pub const LABEL_STACK_NAMESPACE: &str = "stack.namespace";
