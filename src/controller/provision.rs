//! Cluster provisioning.
//!
//! Turns an Added event into one service and one pod per planned member.
//! The initial-cluster string is fixed by the plan before any object is
//! created, so creation order carries no correctness weight; members are
//! submitted in index order as a convention.

use k8s_openapi::api::core::v1::{Pod, Service};
use kube::api::{Api, PostParams};
use kube::Client;
use tracing::{debug, info};

use crate::controller::error::{Error, Result};
use crate::crd::EtcdCluster;
use crate::plan::plan;
use crate::resources::common::NAMESPACE;
use crate::resources::pod::generate_member_pod;
use crate::resources::service::generate_member_service;

/// Provision every member of a newly declared cluster.
///
/// The first failed submission aborts the operation. Objects already
/// created for lower-index members are left in place: a later Deleted
/// event cleans them up by label, so no rollback is attempted here.
pub async fn create_cluster(client: &Client, cluster: &EtcdCluster) -> Result<()> {
    let cluster_name = cluster
        .metadata
        .name
        .as_deref()
        .ok_or(Error::MissingField("metadata.name"))?;
    let size = cluster.spec.size;

    let plan = plan(cluster_name, size)?;
    info!(cluster = %cluster_name, size, "provisioning etcd cluster");

    let services: Api<Service> = Api::namespaced(client.clone(), NAMESPACE);
    let pods: Api<Pod> = Api::namespaced(client.clone(), NAMESPACE);
    let pp = PostParams::default();

    for member in &plan.members {
        let service = generate_member_service(member, cluster_name);
        services.create(&pp, &service).await?;

        let pod = generate_member_pod(member, cluster_name, &plan.initial_cluster);
        pods.create(&pp, &pod).await?;

        debug!(member = %member.name, "created member service and pod");
    }

    info!(cluster = %cluster_name, size, "etcd cluster provisioned");
    Ok(())
}
