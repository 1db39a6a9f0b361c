use std::time::Duration;

use composer_core::PlatformError;
use thiserror::Error;

/// Failure of an external command driven by an adapter.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("timed out running '{command}' (exceeded {}s)", .timeout.as_secs())]
    Timeout { command: String, timeout: Duration },

    #[error("'{command}' failed{}: {stderr}", exit_suffix(.exit_code))]
    CommandFailed {
        command: String,
        stderr: String,
        exit_code: Option<i32>,
    },

    #[error("failed to execute '{command}': {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected output from '{command}': {reason}")]
    Decode { command: String, reason: String },
}

fn exit_suffix(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!(" (exit code {code})"),
        None => String::new(),
    }
}

impl ExecError {
    pub fn failed(command: impl Into<String>, output: &std::process::Output) -> Self {
        ExecError::CommandFailed {
            command: command.into(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            exit_code: output.status.code(),
        }
    }

    pub fn decode(command: impl Into<String>, reason: impl ToString) -> Self {
        ExecError::Decode {
            command: command.into(),
            reason: reason.to_string(),
        }
    }
}

impl From<ExecError> for PlatformError {
    fn from(err: ExecError) -> Self {
        let message = err.to_string();
        match err {
            ExecError::Timeout { .. } | ExecError::Spawn { .. } => {
                PlatformError::Unavailable(message)
            }
            ExecError::CommandFailed { .. } => PlatformError::Rejected(message),
            ExecError::Decode { .. } => PlatformError::Malformed(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_unavailable() {
        let err = ExecError::Timeout {
            command: "docker network ls".into(),
            timeout: Duration::from_secs(30),
        };
        assert_eq!(
            PlatformError::from(err),
            PlatformError::Unavailable(
                "timed out running 'docker network ls' (exceeded 30s)".into()
            )
        );
    }

    #[test]
    fn non_zero_exit_is_rejected_with_stderr() {
        let err = ExecError::CommandFailed {
            command: "docker service create".into(),
            stderr: "name conflicts with an existing object".into(),
            exit_code: Some(1),
        };
        match PlatformError::from(err) {
            PlatformError::Rejected(msg) => {
                assert!(msg.contains("exit code 1"));
                assert!(msg.contains("name conflicts"));
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[test]
    fn spawn_failure_is_unavailable() {
        let err = ExecError::Spawn {
            command: "docker node ls".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(matches!(
            PlatformError::from(err),
            PlatformError::Unavailable(_)
        ));
    }

    #[test]
    fn decode_failure_is_malformed() {
        let err = ExecError::decode("docker node inspect", "expected array");
        assert!(matches!(PlatformError::from(err), PlatformError::Malformed(_)));
    }
}
