//! etcd-operator library crate
//!
//! A controller that provisions and tears down fixed-size etcd clusters
//! declared as EtcdCluster custom resources. It watches the resource for
//! create and delete events and reconciles pods and services to match.

pub mod config;
pub mod controller;
pub mod crd;
pub mod plan;
pub mod resources;

pub use config::Config;
pub use controller::run::run_controller;
pub use crd::EtcdCluster;
