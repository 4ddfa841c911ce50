use std::path::PathBuf;

use anyhow::{bail, Result};
use tracing::info;

use switch_manager::{cluster, config, ssh};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let path = match std::env::args().nth(1) {
        Some(path) => PathBuf::from(path),
        None => bail!("usage: switch-manager <operation.toml>"),
    };

    info!("Starting Switch Manager");

    let operation = config::load_operation(&path).await?;

    let report = if let Some(cluster_request) = &operation.cluster {
        let report = cluster::run_cluster(&operation.cli_path, cluster_request).await?;
        serde_json::to_string_pretty(&report)?
    } else if let Some(reset_request) = &operation.reset {
        let report = ssh::operations::run_reset(&operation.cli_path, reset_request).await?;
        serde_json::to_string_pretty(&report)?
    } else {
        // load_operation rejects files without exactly one operation table
        bail!("operation file contains no operation");
    };

    println!("{}", report);
    Ok(())
}
