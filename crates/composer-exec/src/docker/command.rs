use std::{process::Stdio, time::Duration};

use tokio::process::Command;
use tracing::trace;

use crate::ExecError;

/// Thin wrapper around the docker binary.
///
/// Every invocation runs with the same timeout. A child that outlives its
/// timeout is killed.
#[derive(Debug, Clone)]
pub struct DockerCli {
    bin: String,
    timeout: Duration,
}

impl DockerCli {
    pub fn new(bin: impl Into<String>, timeout: Duration) -> Self {
        Self {
            bin: bin.into(),
            timeout,
        }
    }

    pub fn bin(&self) -> &str {
        &self.bin
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Short command label for errors and logs.
    ///
    /// Only the binary and the subcommand are shown; the remaining arguments
    /// may carry environment values.
    pub fn label(&self, args: &[String]) -> String {
        let mut label = self.bin.clone();
        for arg in args.iter().take(2) {
            label.push(' ');
            label.push_str(arg);
        }
        label
    }

    /// Run the command and return its raw output, whatever the exit status.
    pub async fn run(&self, args: &[String]) -> Result<std::process::Output, ExecError> {
        let command = self.label(args);
        trace!(%command, args = args.len(), "running docker command");

        let child = Command::new(&self.bin)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .output();

        match tokio::time::timeout(self.timeout, child).await {
            Ok(Ok(output)) => Ok(output),
            Ok(Err(source)) => Err(ExecError::Spawn { command, source }),
            Err(_) => Err(ExecError::Timeout {
                command,
                timeout: self.timeout,
            }),
        }
    }

    /// Run the command and return its stdout, failing on a non-zero exit.
    pub async fn run_success(&self, args: &[String]) -> Result<String, ExecError> {
        let output = self.run(args).await?;
        if !output.status.success() {
            return Err(ExecError::failed(self.label(args), &output));
        }
        String::from_utf8(output.stdout).map_err(|e| ExecError::decode(self.label(args), e))
    }
}
