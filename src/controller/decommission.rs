//! Cluster decommissioning.
//!
//! Locates every object belonging to the named cluster by label selector
//! and deletes it. The controller holds no references to the objects it
//! created; they are looked up fresh on every delete, which also cleans up
//! the leftovers of a partially provisioned cluster.

use k8s_openapi::api::core::v1::{Pod, Service};
use kube::api::{Api, DeleteParams, ListParams};
use kube::{Client, ResourceExt};
use tracing::{debug, info};

use crate::controller::error::{Error, Result};
use crate::crd::EtcdCluster;
use crate::resources::common::{cluster_selector, NAMESPACE};

/// Remove every pod and service labeled with the cluster's name.
///
/// Deletions within a kind are unordered; any list or delete failure
/// aborts the operation and the partial teardown stands.
pub async fn delete_cluster(client: &Client, cluster: &EtcdCluster) -> Result<()> {
    let cluster_name = cluster
        .metadata
        .name
        .as_deref()
        .ok_or(Error::MissingField("metadata.name"))?;

    info!(cluster = %cluster_name, "decommissioning etcd cluster");

    let lp = ListParams::default().labels(&cluster_selector(cluster_name));
    let dp = DeleteParams::default();

    let pods: Api<Pod> = Api::namespaced(client.clone(), NAMESPACE);
    for pod in pods.list(&lp).await?.items {
        let name = pod.name_any();
        pods.delete(&name, &dp).await?;
        debug!(pod = %name, "deleted member pod");
    }

    let services: Api<Service> = Api::namespaced(client.clone(), NAMESPACE);
    for service in services.list(&lp).await?.items {
        let name = service.name_any();
        services.delete(&name, &dp).await?;
        debug!(service = %name, "deleted member service");
    }

    info!(cluster = %cluster_name, "etcd cluster decommissioned");
    Ok(())
}
