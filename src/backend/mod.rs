//! Storage backend abstraction.
//!
//! Every data source the board can load from implements [`Backend`]. The
//! sync service walks an ordered chain of them (cloud, local backup, demo
//! data) and the first one that yields text wins. The cloud backend is
//! assembled from two injected pieces, a [`TextFetcher`] for reads and a
//! [`CloudPublisher`] for writes, so a real remote can replace the
//! simulated one without touching the sync service.

use async_trait::async_trait;
use std::fmt;

pub mod cloud;
pub mod demo;
pub mod factory;
pub mod http;
pub mod local;
pub mod simulated;

pub use cloud::CloudBackend;
pub use demo::DemoBackend;
pub use factory::{create_backends, BackendSet};
pub use http::HttpFetcher;
pub use local::LocalBackend;
pub use simulated::{CloudSnapshot, SimulatedPublisher};

/// Common error types for backend operations.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid data: {0}")]
    Parse(String),

    #[error("Local storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Operation not supported: {0}")]
    Unsupported(String),
}

/// Where a loaded item list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Cloud,
    Backup,
    Demo,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DataSource::Cloud => "cloud",
            DataSource::Backup => "backup",
            DataSource::Demo => "demo",
        };
        f.write_str(name)
    }
}

/// A load/save provider over the textual board format.
#[async_trait]
pub trait Backend: Send + Sync {
    /// Which source this backend represents.
    fn source(&self) -> DataSource;

    /// Load the raw board text, or `None` when this source has nothing.
    async fn load(&self) -> Result<Option<String>, BackendError>;

    /// Save the raw board text; `false` means the write did not land.
    async fn save(&self, text: &str) -> Result<bool, BackendError>;
}

/// Reads the shared board text from somewhere remote.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// First successful body, or `None` when every attempt failed.
    async fn fetch(&self) -> Option<String>;
}

/// Publishes the encoded board to the remote.
#[async_trait]
pub trait CloudPublisher: Send + Sync {
    async fn publish(&self, text: &str) -> Result<(), BackendError>;
}
