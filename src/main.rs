//! etcd-operator - a Kubernetes controller for EtcdCluster custom resources.
//!
//! This is the main entry point that:
//! - Initializes structured logging
//! - Reads the configuration and creates the Kubernetes client
//! - Runs the reconciliation loop until it fails or a shutdown signal arrives

use kube::Client;
use tokio::signal;
use tokio::sync::watch;
use tracing::{error, info};

use etcd_operator::{run_controller, Config};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("etcd_operator=info".parse()?)
                .add_directive("kube=info".parse()?),
        )
        .init();

    let config = Config::from_env();
    info!(master = %config.master_host, "starting etcd-operator");

    let kube_config = kube::Config::new(config.master_uri()?);
    let client = Client::try_from(kube_config)?;

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let mut controller = tokio::spawn(run_controller(client, shutdown_rx));

    tokio::select! {
        result = &mut controller => {
            match result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!(error = %e, "controller terminated");
                    return Err(e.into());
                }
                Err(e) => {
                    error!(error = %e, "controller task panicked");
                    return Err(e.into());
                }
            }
        }
        _ = signal::ctrl_c() => {
            info!("received shutdown signal");
            let _ = shutdown_tx.send(true);
            // Wait for the loop to finish the in-flight reconciliation.
            let _ = controller.await;
        }
    }

    Ok(())
}
