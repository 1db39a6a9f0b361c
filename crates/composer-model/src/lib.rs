mod domain;
pub use domain::*;

mod error;
pub use error::{ModelError, ModelResult};

mod cluster;
pub use cluster::{NetworkInfo, NodeInfo, NodeRole};

mod spec;
pub use spec::ServiceDefinition;

pub mod source;
pub use source::{load_env_file, parse_env};
