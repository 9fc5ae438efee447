// src/runner.rs
use crate::types::BHuntyError;
use async_trait::async_trait;
use log::debug;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

/// Captured result of one external tool invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub stdout: String,
    pub stderr: String,
    pub success: bool,
    pub code: Option<i32>,
}

impl CommandOutput {
    /// Standard output followed by standard error.
    pub fn combined(&self) -> String {
        let mut text = self.stdout.clone();
        text.push_str(&self.stderr);
        text
    }

    pub fn status_description(&self) -> String {
        match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs external tools. Injected into the sources so tests can script tool output.
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `program` to completion, or until `timeout` elapses when one is given.
    ///
    /// A spawn failure is a `ToolError`, an expired timeout a `TimeoutError`.
    /// A non-zero exit is not an error at this level; callers inspect `success`.
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, BHuntyError>;
}

/// Runs tools as real child processes with an in-process timeout.
#[derive(Debug, Clone, Default)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run_with_timeout(
        &self,
        program: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> Result<CommandOutput, BHuntyError> {
        debug!("Running {} {}", program, args.join(" "));

        let child = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| BHuntyError::ToolError {
                tool: program.to_string(),
                message: format!("failed to start: {}", e),
            })?;

        // Dropping the wait future on timeout kills the child
        let output = match timeout {
            Some(limit) => tokio::time::timeout(limit, child.wait_with_output())
                .await
                .map_err(|_| {
                    BHuntyError::TimeoutError(format!("{} did not finish within {:?}", program, limit))
                })?,
            None => child.wait_with_output().await,
        }
        .map_err(|e| BHuntyError::ToolError {
            tool: program.to_string(),
            message: e.to_string(),
        })?;

        Ok(CommandOutput {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            success: output.status.success(),
            code: output.status.code(),
        })
    }
}


#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[tokio::test]
    async fn test_captures_stdout_and_stderr() {
        let output = ProcessRunner::new()
            .run_with_timeout("sh", &sh("echo out; echo err >&2"), None)
            .await
            .unwrap();

        assert!(output.success);
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
        assert_eq!(output.combined(), "out\nerr\n");
    }

    #[tokio::test]
    async fn test_non_zero_exit_is_reported_not_raised() {
        let output = ProcessRunner::new()
            .run_with_timeout("sh", &sh("exit 3"), Some(Duration::from_secs(5)))
            .await
            .unwrap();

        assert!(!output.success);
        assert_eq!(output.code, Some(3));
        assert_eq!(output.status_description(), "exit status 3");
    }

    #[tokio::test]
    async fn test_timeout_expires() {
        let err = ProcessRunner::new()
            .run_with_timeout("sh", &sh("sleep 5"), Some(Duration::from_millis(100)))
            .await
            .unwrap_err();

        assert!(matches!(err, BHuntyError::TimeoutError(_)));
    }

    #[tokio::test]
    async fn test_missing_program() {
        let err = ProcessRunner::new()
            .run_with_timeout("bhunty-no-such-tool", &[], None)
            .await
            .unwrap_err();

        assert!(matches!(err, BHuntyError::ToolError { .. }));
    }
}
