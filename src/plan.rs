//! Peer address planning for etcd clusters.
//!
//! Member names and peer URLs are a pure function of (cluster name, size),
//! so every reconciliation run computes the same topology without any
//! coordination. The initial-cluster string is fixed before any member is
//! created and every member receives the identical copy; diverging strings
//! would split the quorum at bootstrap.

use crate::controller::error::Error;

/// etcd peer port (member-to-member coordination)
pub const PEER_PORT: i32 = 2380;
/// etcd client port
pub const CLIENT_PORT: i32 = 2379;

/// One planned member of an etcd cluster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Member {
    /// Zero-based member index.
    pub index: i32,
    /// Member name, `{cluster}-{index:04}`. Injective in (cluster, index).
    pub name: String,
    /// Peer URL advertised to the other members.
    pub peer_url: String,
}

impl Member {
    fn new(cluster_name: &str, index: i32) -> Self {
        let name = format!("{cluster_name}-{index:04}");
        let peer_url = format!("http://{name}:{PEER_PORT}");
        Self {
            index,
            name,
            peer_url,
        }
    }

    /// Client URL advertised by this member.
    pub fn client_url(&self) -> String {
        format!("http://{}:{CLIENT_PORT}", self.name)
    }
}

/// The full member topology for one cluster.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClusterPlan {
    /// Members in ascending index order.
    pub members: Vec<Member>,
    /// Comma-joined `{name}={peer_url}` for every member, in index order.
    /// Shared verbatim by every member of the cluster.
    pub initial_cluster: String,
}

/// Compute the member topology for a cluster of the given name and size.
///
/// Pure and deterministic: identical inputs always yield identical output.
pub fn plan(cluster_name: &str, size: i32) -> Result<ClusterPlan, Error> {
    if size < 1 {
        return Err(Error::InvalidSpec(format!(
            "cluster size must be at least 1, got {size}"
        )));
    }

    let members: Vec<Member> = (0..size).map(|i| Member::new(cluster_name, i)).collect();
    let initial_cluster = members
        .iter()
        .map(|m| format!("{}={}", m.name, m.peer_url))
        .collect::<Vec<_>>()
        .join(",");

    Ok(ClusterPlan {
        members,
        initial_cluster,
    })
}
