mod kv;
pub use kv::KeyValue;

mod env;
pub use env::Env;

mod envset;
pub use envset::EnvSet;

mod labels;
pub use labels::Labels;

mod constants;
pub use constants::*;

/// Identifier the platform assigns to a created service.
pub type ServiceId = String;
