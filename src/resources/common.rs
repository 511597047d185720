//! Common resource generation utilities.
//!
//! Provides the label scheme shared by member pods and services. Deletion
//! relies on the `etcd_cluster` label to locate every object belonging to
//! one cluster, so both kinds must carry it.

use std::collections::BTreeMap;

/// Label identifying which cluster an object belongs to
pub const CLUSTER_LABEL: &str = "etcd_cluster";
/// Label identifying which member an object belongs to
pub const NODE_LABEL: &str = "etcd_node";
/// Application label applied to member pods
pub const APP_LABEL: &str = "app";
/// Application label value
pub const APP_NAME: &str = "etcd";

/// Namespace all managed objects live in
pub const NAMESPACE: &str = "default";

/// Labels applied to a member's service and used as its pod selector.
pub fn member_labels(cluster_name: &str, member_name: &str) -> BTreeMap<String, String> {
    let mut labels = BTreeMap::new();
    labels.insert(NODE_LABEL.to_string(), member_name.to_string());
    labels.insert(CLUSTER_LABEL.to_string(), cluster_name.to_string());
    labels
}

/// Labels applied to a member's pod.
pub fn pod_labels(cluster_name: &str, member_name: &str) -> BTreeMap<String, String> {
    let mut labels = member_labels(cluster_name, member_name);
    labels.insert(APP_LABEL.to_string(), APP_NAME.to_string());
    labels
}

/// Label selector matching every object of one cluster and nothing else.
pub fn cluster_selector(cluster_name: &str) -> String {
    format!("{CLUSTER_LABEL}={cluster_name}")
}
