//! Controller configuration.
//!
//! The single configurable value is the Kubernetes API base URL. It is read
//! once at startup and threaded explicitly into client construction; there
//! is no process-wide mutable state.

use http::uri::InvalidUri;
use http::Uri;

/// Environment variable naming the Kubernetes API base URL
pub const MASTER_HOST_ENV: &str = "ETCD_OPERATOR_MASTER";

/// Default API base URL (local unauthenticated apiserver)
pub const DEFAULT_MASTER_HOST: &str = "http://127.0.0.1:8080";

/// Controller configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Kubernetes API base URL.
    pub master_host: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            master_host: DEFAULT_MASTER_HOST.to_string(),
        }
    }
}

impl Config {
    /// Read configuration from the environment, falling back to defaults.
    pub fn from_env() -> Self {
        let master_host =
            std::env::var(MASTER_HOST_ENV).unwrap_or_else(|_| DEFAULT_MASTER_HOST.to_string());
        Self { master_host }
    }

    /// Parse the master host into a URI for client construction.
    pub fn master_uri(&self) -> Result<Uri, InvalidUri> {
        self.master_host.parse()
    }
}
