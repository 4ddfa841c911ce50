//! Local subprocess execution

use anyhow::Result;
use serde::Serialize;
use tokio::process::Command as AsyncCommand;
use tracing::debug;

use crate::command::BuiltCommand;

/// Raw outcome of one invocation, local or remote.
#[derive(Debug, Clone, Serialize)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl ExecutionResult {
    pub fn new(exit_code: i32, stdout: &str, stderr: &str) -> Self {
        Self {
            exit_code,
            stdout: stdout.trim_end_matches(['\r', '\n']).to_string(),
            stderr: stderr.trim_end_matches(['\r', '\n']).to_string(),
        }
    }
}

/// Run a built command to completion on the control host, capturing both
/// streams. Blocks until the process exits; no timeout is imposed here. A
/// non-zero exit is reported through the result, not as an error.
pub async fn run_local(command: &BuiltCommand) -> Result<ExecutionResult> {
    debug!("Executing local command: {}", command.command_line());

    let output = AsyncCommand::new(command.program())
        .args(command.args())
        .output()
        .await?;

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let exit_code = output.status.code().unwrap_or(-1);

    debug!(
        "Local command completed with exit code {}: {} chars stdout, {} chars stderr",
        exit_code,
        stdout.len(),
        stderr.len()
    );

    Ok(ExecutionResult::new(exit_code, &stdout, &stderr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_newlines_trimmed() {
        let result = ExecutionResult::new(0, "created cluster\r\n", "warning\n\n");
        assert_eq!(result.stdout, "created cluster");
        assert_eq!(result.stderr, "warning");
    }

    #[test]
    fn test_interior_newlines_preserved() {
        let result = ExecutionResult::new(1, "line1\nline2\n", "");
        assert_eq!(result.stdout, "line1\nline2");
        assert_eq!(result.stderr, "");
    }
}
