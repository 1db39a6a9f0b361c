mod error;
pub use error::ExecError;

#[cfg(feature = "docker")]
pub mod docker;
