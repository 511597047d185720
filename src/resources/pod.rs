//! Pod generation for etcd cluster members.
//!
//! Each member runs as a single pod with `--initial-cluster-state new`:
//! every member in this design is a founding member, so the quorum set is
//! fixed by the shared initial-cluster string passed to all of them.

use k8s_openapi::api::core::v1::{Container, ContainerPort, Pod, PodSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

use crate::plan::{Member, PEER_PORT};
use crate::resources::common::{pod_labels, NAMESPACE};

/// etcd container image (fixed, not configurable per cluster)
const ETCD_IMAGE: &str = "gcr.io/coreos-k8s-scale-testing/etcd-amd64:3.0.4";

/// Generate the Pod for one cluster member.
///
/// `initial_cluster` must be the shared string from the cluster's plan,
/// identical across all members.
pub fn generate_member_pod(member: &Member, cluster_name: &str, initial_cluster: &str) -> Pod {
    let labels = pod_labels(cluster_name, &member.name);

    Pod {
        metadata: ObjectMeta {
            name: Some(member.name.clone()),
            namespace: Some(NAMESPACE.to_string()),
            labels: Some(labels),
            ..Default::default()
        },
        spec: Some(PodSpec {
            containers: vec![Container {
                name: member.name.clone(),
                image: Some(ETCD_IMAGE.to_string()),
                command: Some(etcd_command(member, initial_cluster)),
                ports: Some(vec![ContainerPort {
                    name: Some("server".to_string()),
                    container_port: PEER_PORT,
                    protocol: Some("TCP".to_string()),
                    ..Default::default()
                }]),
                ..Default::default()
            }],
            restart_policy: Some("Never".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Build the etcd invocation for a member.
fn etcd_command(member: &Member, initial_cluster: &str) -> Vec<String> {
    vec![
        "/usr/local/bin/etcd".to_string(),
        "--name".to_string(),
        member.name.clone(),
        "--initial-advertise-peer-urls".to_string(),
        member.peer_url.clone(),
        "--listen-peer-urls".to_string(),
        "http://0.0.0.0:2380".to_string(),
        "--listen-client-urls".to_string(),
        "http://0.0.0.0:2379".to_string(),
        "--advertise-client-urls".to_string(),
        member.client_url(),
        "--initial-cluster".to_string(),
        initial_cluster.to_string(),
        "--initial-cluster-state".to_string(),
        "new".to_string(),
    ]
}
