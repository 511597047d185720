//! Controller module for etcd-operator.
//!
//! Contains the watch stream producer, the reconciliation loop, the
//! provisioning/decommissioning operations and the error taxonomy.

pub mod decommission;
pub mod error;
pub mod provision;
pub mod run;
pub mod watch;
