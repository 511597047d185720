//! Custom Resource Definitions for etcd-operator.
//!
//! - `EtcdCluster`: declares a fixed-size etcd cluster to be provisioned

mod etcd_cluster;

pub use etcd_cluster::*;
