//! The reconciliation loop.
//!
//! Single consumer of the watch stream: reads one event at a time and fully
//! completes the corresponding provision or decommission before accepting
//! the next. The capacity-one event channel serializes reconciliation, so
//! two clusters are never provisioned concurrently and a create/delete pair
//! for the same cluster is handled in arrival order.

use kube::api::Api;
use kube::Client;
use tokio::sync::watch;
use tracing::{error, info};

use crate::controller::decommission::delete_cluster;
use crate::controller::error::{Error, Result};
use crate::controller::provision::create_cluster;
use crate::controller::watch::{ChangeEvent, WatchStream};
use crate::crd::EtcdCluster;
use crate::resources::common::NAMESPACE;

/// Run the controller until the stream breaks or shutdown is signalled.
///
/// Failure policy: stream errors (connection, decode, end of stream) are
/// fatal and returned to the caller; a failed platform call or an invalid
/// resource is logged and the loop moves on to the next event. Nothing is
/// retried.
pub async fn run_controller(client: Client, shutdown: watch::Receiver<bool>) -> Result<()> {
    let api: Api<EtcdCluster> = Api::namespaced(client.clone(), NAMESPACE);
    let mut stream = WatchStream::open(api, shutdown.clone()).await?;
    let mut shutdown = shutdown;

    info!("etcd cluster controller started");

    let result = loop {
        tokio::select! {
            biased;

            _ = shutdown.changed() => {
                info!("controller stopping on shutdown signal");
                break Ok(());
            }

            err = stream.errors.recv() => {
                // The producer sends exactly one fatal error before exiting;
                // a closed error channel means it stopped without one.
                break Err(err.unwrap_or(Error::StreamClosed));
            }

            event = stream.events.recv() => {
                let Some(event) = event else {
                    break Err(Error::StreamClosed);
                };
                if let Err(e) = dispatch(&client, event).await {
                    if e.is_fatal() {
                        break Err(e);
                    }
                    error!(error = %e, "reconciliation failed, continuing with next event");
                }
            }
        }
    };

    stream.abort();
    result
}

async fn dispatch(client: &Client, event: ChangeEvent) -> Result<()> {
    match event {
        ChangeEvent::Added(cluster) => create_cluster(client, &cluster).await,
        ChangeEvent::Deleted(cluster) => delete_cluster(client, &cluster).await,
    }
}
