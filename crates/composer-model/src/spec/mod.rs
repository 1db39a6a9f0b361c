mod service;
pub use service::ServiceDefinition;
