//! Resource generation module.
//!
//! Contains utilities for generating the Kubernetes resources that make up
//! an etcd cluster.
//!
//! ## Resources Generated
//!
//! | Resource | Purpose |
//! |----------|---------|
//! | Service (per member) | Stable network identity on the peer port |
//! | Pod (per member) | One etcd process, bootstrapped as a founding member |

pub mod common;
pub mod pod;
pub mod service;

pub use common::{cluster_selector, member_labels, pod_labels};
