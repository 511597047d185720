//! Error types for the controller.
//!
//! Errors are classified into fatal conditions (the watch stream is broken
//! and the controller must stop) and recoverable ones (a single platform
//! call or resource failed; the loop logs and moves on to the next event).

use thiserror::Error;

/// Error type for controller operations
#[derive(Error, Debug)]
pub enum Error {
    /// Watch connection could not be established or returned a non-success
    /// status. Fatal.
    #[error("failed to open watch connection: {0}")]
    Connection(#[source] kube::Error),

    /// A watch frame could not be decoded into a change event. Fatal: the
    /// stream is aborted rather than re-read, so a broken stream can never
    /// busy-loop.
    #[error("failed to decode watch frame: {0}")]
    Decode(String),

    /// The watch stream ended. There is no reconnection policy. Fatal.
    #[error("watch stream closed by the server")]
    StreamClosed,

    /// A create/list/delete call against the Kubernetes API failed.
    /// Recoverable at the loop level.
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    /// The declared cluster spec is invalid. Recoverable (the resource is
    /// skipped).
    #[error("invalid cluster spec: {0}")]
    InvalidSpec(String),

    /// The resource is missing a required field. Recoverable.
    #[error("missing required field: {0}")]
    MissingField(&'static str),
}

impl Error {
    /// Whether this error must terminate the reconciliation loop.
    pub fn is_fatal(&self) -> bool {
        match self {
            Error::Connection(_) | Error::Decode(_) | Error::StreamClosed => true,
            Error::Kube(_) | Error::InvalidSpec(_) | Error::MissingField(_) => false,
        }
    }
}

/// Result type alias for controller operations
pub type Result<T> = std::result::Result<T, Error>;
