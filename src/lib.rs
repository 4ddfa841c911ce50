pub mod classify;
pub mod cluster;
pub mod command;
pub mod config;
pub mod errors;
pub mod exec;
pub mod ssh;

// Re-export commonly used types
pub use classify::{classify, HostOutcome, OutcomeCategory};
pub use cluster::{run_cluster, ClusterReport};
pub use command::{build_cluster_command, build_reset_command, BuiltCommand, CommandBuilder};
pub use config::{
    load_operation, ClusterAction, ClusterRequest, Credentials, OperationFile, ResetRequest,
    ValidateLink,
};
pub use errors::ManagerError;
pub use exec::ExecutionResult;
pub use ssh::operations::{run_reset, BatchSummary, ResetReport};
pub use ssh::SshSession;
