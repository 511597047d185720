//! Watch stream producer for EtcdCluster resources.
//!
//! Opens one long-lived watch connection against the EtcdCluster endpoint
//! and forwards decoded change events to the reconciliation loop over a
//! capacity-one channel. The channel is the system's sole backpressure
//! mechanism: the producer blocks on send until the consumer has finished
//! handling the previous event, which serializes reconciliation.
//!
//! There is no reconnection policy. A connect failure, a decode failure or
//! the end of the stream all surface as fatal errors on the error channel.

use futures::StreamExt;
use kube::api::{Api, WatchEvent, WatchParams};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::controller::error::{Error, Result};
use crate::crd::EtcdCluster;

/// A change to the declared set of etcd clusters.
///
/// Modified events are not handled by this controller (cluster resizing is
/// unsupported) and are filtered out before they reach the loop.
#[derive(Clone, Debug)]
pub enum ChangeEvent {
    /// An EtcdCluster resource was created.
    Added(EtcdCluster),
    /// An EtcdCluster resource was deleted.
    Deleted(EtcdCluster),
}

impl ChangeEvent {
    /// Map a raw watch frame to a change event.
    ///
    /// Returns `Ok(None)` for frame types the controller ignores and
    /// `Err(Error::Decode)` for error frames sent by the server.
    pub fn from_watch_event(event: WatchEvent<EtcdCluster>) -> Result<Option<ChangeEvent>> {
        match event {
            WatchEvent::Added(cluster) => Ok(Some(ChangeEvent::Added(cluster))),
            WatchEvent::Deleted(cluster) => Ok(Some(ChangeEvent::Deleted(cluster))),
            WatchEvent::Modified(_) | WatchEvent::Bookmark(_) => Ok(None),
            WatchEvent::Error(e) => Err(Error::Decode(e.message)),
        }
    }

    /// Name of the cluster this event refers to, if the resource has one.
    pub fn cluster_name(&self) -> Option<&str> {
        match self {
            ChangeEvent::Added(cluster) | ChangeEvent::Deleted(cluster) => {
                cluster.metadata.name.as_deref()
            }
        }
    }
}

/// Handle to a running watch stream.
///
/// Events and errors arrive on separate channels; the consumer selects over
/// both. Dropping the handle (or signalling shutdown) stops the producer.
pub struct WatchStream {
    /// Decoded change events, in arrival order.
    pub events: mpsc::Receiver<ChangeEvent>,
    /// Fatal stream errors. At most one is ever sent.
    pub errors: mpsc::Receiver<Error>,
    handle: JoinHandle<()>,
}

impl WatchStream {
    /// Open the watch connection and spawn the producer task.
    ///
    /// Fails immediately with `Error::Connection` if the connection cannot
    /// be established or the initial response status is not success.
    pub async fn open(
        api: Api<EtcdCluster>,
        mut shutdown: watch::Receiver<bool>,
    ) -> Result<Self> {
        let stream = api
            .watch(&WatchParams::default(), "0")
            .await
            .map_err(Error::Connection)?;

        info!("start watching etcd cluster resources");

        let (event_tx, event_rx) = mpsc::channel(1);
        let (error_tx, error_rx) = mpsc::channel(1);

        let handle = tokio::spawn(async move {
            let mut stream = stream.boxed();
            loop {
                let item = tokio::select! {
                    _ = shutdown.changed() => {
                        debug!("watch producer stopping on shutdown signal");
                        return;
                    }
                    item = stream.next() => item,
                };

                let event = match item {
                    Some(Ok(frame)) => match ChangeEvent::from_watch_event(frame) {
                        Ok(Some(event)) => event,
                        Ok(None) => continue,
                        Err(e) => {
                            let _ = error_tx.send(e).await;
                            return;
                        }
                    },
                    Some(Err(e)) => {
                        let _ = error_tx.send(Error::Decode(e.to_string())).await;
                        return;
                    }
                    None => {
                        let _ = error_tx.send(Error::StreamClosed).await;
                        return;
                    }
                };

                debug!(cluster = ?event.cluster_name(), "etcd cluster event");
                tokio::select! {
                    _ = shutdown.changed() => {
                        debug!("watch producer stopping on shutdown signal");
                        return;
                    }
                    sent = event_tx.send(event) => {
                        if sent.is_err() {
                            // Consumer is gone; nothing left to do.
                            return;
                        }
                    }
                }
            }
        });

        Ok(Self {
            events: event_rx,
            errors: error_rx,
            handle,
        })
    }

    /// Abort the producer task.
    pub fn abort(&self) {
        self.handle.abort();
    }
}
