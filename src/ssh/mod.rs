//! Password-authenticated remote shell execution

pub mod operations;

use anyhow::Result;
use async_ssh2_tokio::client::{AuthMethod, Client, ServerCheckMethod};
use tracing::debug;

use crate::config::Credentials;
use crate::errors::ManagerError;
use crate::exec::ExecutionResult;

pub struct SshSession {
    client: Client,
    host: String,
}

impl SshSession {
    pub async fn connect(host: &str, credentials: &Credentials) -> Result<Self, ManagerError> {
        debug!("Opening SSH session to {}@{}", credentials.username, host);

        let (hostname, port) = match host.rsplit_once(':') {
            Some((hostname, port)) => {
                let port = port.parse::<u16>().map_err(|_| ManagerError::Transport {
                    host: host.to_string(),
                    reason: format!("invalid port in address '{}'", host),
                })?;
                (hostname.to_string(), port)
            }
            None => (host.to_string(), 22),
        };

        let auth_method = AuthMethod::with_password(&credentials.password);
        let client = Client::connect(
            (hostname.as_str(), port),
            &credentials.username,
            auth_method,
            ServerCheckMethod::NoCheck,
        )
        .await
        .map_err(|e| ManagerError::Transport {
            host: host.to_string(),
            reason: e.to_string(),
        })?;

        debug!("SSH session established to {}@{}", credentials.username, host);

        Ok(Self {
            client,
            host: host.to_string(),
        })
    }

    /// Run one command over the session, blocking until it exits. A non-zero
    /// exit status is reported through the result, not as an error.
    pub async fn execute(&self, command: &str) -> Result<ExecutionResult, ManagerError> {
        let result =
            self.client
                .execute(command)
                .await
                .map_err(|e| ManagerError::Transport {
                    host: self.host.clone(),
                    reason: e.to_string(),
                })?;

        debug!(
            "Remote command completed on {} with exit status {}",
            self.host, result.exit_status
        );

        Ok(ExecutionResult::new(
            result.exit_status as i32,
            &result.stdout,
            &result.stderr,
        ))
    }
}

/// Run one command over a fresh session. Sessions are not shared between
/// invocations: the probe and the reset each get their own, matching the
/// one-connection-per-command model of the underlying tooling.
pub async fn execute_once(
    host: &str,
    credentials: &Credentials,
    command: &str,
) -> Result<ExecutionResult, ManagerError> {
    let session = SshSession::connect(host, credentials).await?;
    session.execute(command).await
}
