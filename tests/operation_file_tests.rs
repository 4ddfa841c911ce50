//! Integration tests for operation file loading and validation
//!
//! Operation files are the validated-configuration boundary: anything
//! malformed must be rejected here, before a command is ever built or a
//! connection opened.

use std::io::Write;

use switch_manager::config::{load_operation, ClusterAction, ValidateLink, DEFAULT_CLI_PATH};
use tempfile::NamedTempFile;

fn write_operation_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write operation file");
    file
}

#[tokio::test]
async fn test_load_cluster_create_operation() {
    let file = write_operation_file(
        r#"
[cluster]
action = "create"
name = "spine-cluster"
node1 = "spine01"
node2 = "spine02"
validate = "validate"
"#,
    );

    let operation = load_operation(file.path()).await.unwrap();
    assert_eq!(operation.cli_path, DEFAULT_CLI_PATH);

    let cluster = operation.cluster.unwrap();
    assert_eq!(cluster.action, ClusterAction::Create);
    assert_eq!(cluster.name, "spine-cluster");
    assert_eq!(cluster.node1.as_deref(), Some("spine01"));
    assert_eq!(cluster.validate, Some(ValidateLink::Validate));
    assert!(cluster.quiet, "quiet should default to true");
}

#[tokio::test]
async fn test_load_cluster_delete_operation() {
    let file = write_operation_file(
        r#"
cli_path = "/opt/nvOS/bin/cli"

[cluster]
action = "delete"
name = "spine-cluster"
quiet = false
"#,
    );

    let operation = load_operation(file.path()).await.unwrap();
    assert_eq!(operation.cli_path, "/opt/nvOS/bin/cli");

    let cluster = operation.cluster.unwrap();
    assert_eq!(cluster.action, ClusterAction::Delete);
    assert!(!cluster.quiet);
    assert!(cluster.node1.is_none());
}

#[tokio::test]
async fn test_load_reset_operation() {
    let file = write_operation_file(
        r#"
[reset]
username = "network-admin"
password = "pluribus"
hosts = ["sw01", "sw02"]
host_ips = ["10.0.0.1", "10.0.0.2"]
"#,
    );

    let operation = load_operation(file.path()).await.unwrap();
    let reset = operation.reset.unwrap();
    assert_eq!(reset.credentials.username, "network-admin");
    assert_eq!(reset.hosts, ["sw01", "sw02"]);
    assert_eq!(reset.host_ips, ["10.0.0.1", "10.0.0.2"]);
}

#[tokio::test]
async fn test_create_without_nodes_rejected() {
    let file = write_operation_file(
        r#"
[cluster]
action = "create"
name = "spine-cluster"
"#,
    );

    let err = load_operation(file.path()).await.unwrap_err();
    assert!(err.to_string().contains("node1"));
}

#[tokio::test]
async fn test_mismatched_host_lists_rejected() {
    let file = write_operation_file(
        r#"
[reset]
username = "network-admin"
password = "pluribus"
hosts = ["sw01", "sw02"]
host_ips = ["10.0.0.1"]
"#,
    );

    let err = load_operation(file.path()).await.unwrap_err();
    assert!(err.to_string().contains("host_ips"));
}

#[tokio::test]
async fn test_file_with_both_operations_rejected() {
    let file = write_operation_file(
        r#"
[cluster]
action = "delete"
name = "spine-cluster"

[reset]
username = "network-admin"
password = "pluribus"
hosts = ["sw01"]
host_ips = ["10.0.0.1"]
"#,
    );

    assert!(load_operation(file.path()).await.is_err());
}

#[tokio::test]
async fn test_empty_file_rejected() {
    let file = write_operation_file("");
    assert!(load_operation(file.path()).await.is_err());
}
