//! Service generation for etcd cluster members.
//!
//! Each member gets its own Service named after it, exposing the peer port
//! and selecting that member's pod. The service name doubles as the stable
//! DNS name the member advertises in its peer URL.

use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

use crate::plan::{Member, PEER_PORT};
use crate::resources::common::{member_labels, NAMESPACE};

/// Generate the Service for one cluster member.
pub fn generate_member_service(member: &Member, cluster_name: &str) -> Service {
    let labels = member_labels(cluster_name, &member.name);

    Service {
        metadata: ObjectMeta {
            name: Some(member.name.clone()),
            namespace: Some(NAMESPACE.to_string()),
            labels: Some(labels.clone()),
            ..Default::default()
        },
        spec: Some(ServiceSpec {
            selector: Some(labels),
            ports: Some(vec![ServicePort {
                name: Some("server".to_string()),
                port: PEER_PORT,
                target_port: Some(IntOrString::Int(PEER_PORT)),
                protocol: Some("TCP".to_string()),
                ..Default::default()
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}
