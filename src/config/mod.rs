//! Operation request types and TOML loading
//!
//! The caller hands the core a fully validated request; nothing in the
//! pipeline reads ambient state. Validation runs before any execution so a
//! malformed request can never reach a switch.

use std::fmt;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::info;

use crate::errors::ManagerError;

pub const DEFAULT_CLI_PATH: &str = "/usr/bin/cli";

fn default_cli_path() -> String {
    DEFAULT_CLI_PATH.to_string()
}

fn default_quiet() -> bool {
    true
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClusterAction {
    Create,
    Delete,
}

impl ClusterAction {
    pub fn subcommand(&self) -> &'static str {
        match self {
            ClusterAction::Create => "cluster-create",
            ClusterAction::Delete => "cluster-delete",
        }
    }
}

/// Tri-state link validation: absent means the CLI tool's own default applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ValidateLink {
    #[serde(rename = "validate")]
    Validate,
    #[serde(rename = "no-validate")]
    NoValidate,
}

impl ValidateLink {
    pub fn token(&self) -> &'static str {
        match self {
            ValidateLink::Validate => "validate",
            ValidateLink::NoValidate => "no-validate",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ClusterRequest {
    pub action: ClusterAction,
    pub name: String,
    pub node1: Option<String>,
    pub node2: Option<String>,
    pub validate: Option<ValidateLink>,
    #[serde(default = "default_quiet")]
    pub quiet: bool,
}

#[derive(Clone, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

// Password must never surface in logs or debug dumps
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResetRequest {
    #[serde(flatten)]
    pub credentials: Credentials,
    pub hosts: Vec<String>,
    pub host_ips: Vec<String>,
}

/// One operation file describes exactly one cluster or reset invocation.
#[derive(Debug, Deserialize)]
pub struct OperationFile {
    #[serde(default = "default_cli_path")]
    pub cli_path: String,
    pub cluster: Option<ClusterRequest>,
    pub reset: Option<ResetRequest>,
}

fn valid_cluster_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

pub fn validate_cluster(request: &ClusterRequest) -> Result<(), ManagerError> {
    if request.name.is_empty() {
        return Err(ManagerError::missing("name"));
    }
    if !valid_cluster_name(&request.name) {
        return Err(ManagerError::invalid(
            "name",
            "cluster names may only contain alphanumerics, '_', '-' and '.'",
        ));
    }

    if request.action == ClusterAction::Create {
        match &request.node1 {
            Some(node) if !node.is_empty() => {}
            _ => return Err(ManagerError::missing("node1")),
        }
        match &request.node2 {
            Some(node) if !node.is_empty() => {}
            _ => return Err(ManagerError::missing("node2")),
        }
    }

    Ok(())
}

pub fn validate_reset(request: &ResetRequest) -> Result<(), ManagerError> {
    if request.credentials.username.is_empty() {
        return Err(ManagerError::missing("username"));
    }
    if request.credentials.password.is_empty() {
        return Err(ManagerError::missing("password"));
    }
    if request.hosts.is_empty() {
        return Err(ManagerError::missing("hosts"));
    }
    if request.hosts.len() != request.host_ips.len() {
        return Err(ManagerError::invalid(
            "host_ips",
            format!(
                "expected {} addresses to match hosts, got {}",
                request.hosts.len(),
                request.host_ips.len()
            ),
        ));
    }

    Ok(())
}

pub async fn load_operation(path: &Path) -> Result<OperationFile> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read operation file {}", path.display()))?;

    let operation: OperationFile = toml::from_str(&content)
        .with_context(|| format!("failed to parse operation file {}", path.display()))?;

    match (&operation.cluster, &operation.reset) {
        (Some(cluster), None) => {
            validate_cluster(cluster)?;
            info!(
                "Loaded {} operation for cluster {}",
                cluster.action.subcommand(),
                cluster.name
            );
        }
        (None, Some(reset)) => {
            validate_reset(reset)?;
            info!("Loaded reset operation for {} switches", reset.hosts.len());
        }
        _ => {
            return Err(ManagerError::invalid(
                "operation",
                "exactly one of [cluster] or [reset] must be present",
            )
            .into());
        }
    }

    Ok(operation)
}
