//! EtcdCluster Custom Resource Definition.
//!
//! Declares the desired state of a fixed-size etcd cluster. The controller
//! watches this resource and provisions one pod and one service per member.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// EtcdCluster is a custom resource for deploying etcd clusters.
///
/// Example:
/// ```yaml
/// apiVersion: coreos.com/v1
/// kind: EtcdCluster
/// metadata:
///   name: test
/// spec:
///   size: 3
/// ```
#[derive(CustomResource, Clone, Debug, Deserialize, Serialize, JsonSchema)]
#[kube(
    group = "coreos.com",
    version = "v1",
    kind = "EtcdCluster",
    plural = "etcdclusters",
    shortname = "ec",
    namespaced
)]
#[serde(rename_all = "camelCase")]
pub struct EtcdClusterSpec {
    /// Number of founding members. Every member is bootstrapped with the
    /// same initial-cluster string, so the quorum set is fixed at creation.
    pub size: i32,
}
