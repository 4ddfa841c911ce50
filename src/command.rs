//! Structured CLI command construction
//!
//! Commands are assembled as an ordered token sequence and handed to the
//! executors as-is; the human-readable form is rendered by joining the
//! tokens, never the other way around, so nothing ever gets re-split by
//! shell rules.

use crate::config::{ClusterAction, ClusterRequest, Credentials};
use crate::errors::ManagerError;

/// Read-only command used to probe a switch before the privileged reset.
pub const PROBE_COMMAND: &str = "eula-show";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltCommand {
    tokens: Vec<String>,
}

impl BuiltCommand {
    pub fn program(&self) -> &str {
        &self.tokens[0]
    }

    pub fn args(&self) -> &[String] {
        &self.tokens[1..]
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// The human-readable command string, kept for reporting.
    pub fn command_line(&self) -> String {
        self.tokens.join(" ")
    }
}

#[derive(Debug)]
pub struct CommandBuilder {
    tokens: Vec<String>,
}

impl CommandBuilder {
    pub fn new(cli_path: &str) -> Self {
        Self {
            tokens: vec![cli_path.to_string()],
        }
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.tokens.push(token.into());
        self
    }

    pub fn quiet(self, quiet: bool) -> Self {
        if quiet {
            self.token("--quiet")
        } else {
            self
        }
    }

    pub fn build(self) -> BuiltCommand {
        BuiltCommand {
            tokens: self.tokens,
        }
    }
}

/// Assemble the cluster-create/cluster-delete invocation for the local CLI.
///
/// Delete ignores the node and validate fields even when supplied; absence of
/// `validate` on create leaves the tool's own default in effect.
pub fn build_cluster_command(
    cli_path: &str,
    request: &ClusterRequest,
) -> Result<BuiltCommand, ManagerError> {
    crate::config::validate_cluster(request)?;

    let mut builder = CommandBuilder::new(cli_path)
        .quiet(request.quiet)
        .token(request.action.subcommand())
        .token("name")
        .token(&request.name);

    if request.action == ClusterAction::Create {
        // validate_cluster guarantees both nodes are present here
        let node1 = request.node1.as_deref().unwrap_or_default();
        let node2 = request.node2.as_deref().unwrap_or_default();
        builder = builder
            .token("cluster-node-1")
            .token(node1)
            .token("cluster-node-2")
            .token(node2);

        if let Some(validate) = request.validate {
            builder = builder.token(validate.token());
        }
    }

    Ok(builder.build())
}

/// Assemble the privileged reset invocation run over the remote shell.
pub fn build_reset_command(cli_path: &str, credentials: &Credentials) -> BuiltCommand {
    CommandBuilder::new("shell")
        .token(cli_path)
        .token("--quiet")
        .token("--user")
        .token(format!(
            "{}:{}",
            credentials.username, credentials.password
        ))
        .token("--no-login-prompt")
        .token("switch-config-reset")
        .build()
}
