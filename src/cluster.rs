//! Cluster create/delete against the local Netvisor CLI

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use crate::command::build_cluster_command;
use crate::config::ClusterRequest;
use crate::exec::run_local;

/// Caller-facing report for a cluster operation. Raw stdout/stderr are passed
/// through verbatim so tool-level failures stay diagnosable.
#[derive(Debug, Clone, Serialize)]
pub struct ClusterReport {
    pub command: String,
    pub stdout: String,
    pub stdout_lines: Vec<String>,
    pub stderr: String,
    pub changed: bool,
}

/// Build and run a cluster-create/cluster-delete invocation.
///
/// `changed` is always true: the CLI tool is opaque to this layer, so
/// mutation is assumed rather than detected (a delete of a nonexistent
/// cluster still reports changed). Non-zero exits are not errors; stderr is
/// returned for the operator to interpret.
pub async fn run_cluster(cli_path: &str, request: &ClusterRequest) -> Result<ClusterReport> {
    let command = build_cluster_command(cli_path, request)?;

    info!(
        "Running {} for cluster {}",
        request.action.subcommand(),
        request.name
    );

    let result = run_local(&command).await?;
    if result.exit_code != 0 {
        debug!(
            "{} exited with code {}",
            request.action.subcommand(),
            result.exit_code
        );
    }

    let stdout_lines = if result.stdout.is_empty() {
        Vec::new()
    } else {
        result.stdout.lines().map(str::to_string).collect()
    };

    Ok(ClusterReport {
        command: command.command_line(),
        stdout: result.stdout,
        stdout_lines,
        stderr: result.stderr,
        changed: true,
    })
}
