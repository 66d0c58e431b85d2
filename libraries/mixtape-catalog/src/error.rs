//! Error types for catalog and playlist-page operations.

use thiserror::Error;

/// Errors that can occur during catalog search or playlist import.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Rejected input, raised before any network activity
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Playlist reference matched none of the accepted shapes
    #[error("Invalid playlist reference: {0}")]
    InvalidReference(String),

    /// HTTP request failed
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned HTTP {status}")]
    UpstreamStatus {
        /// The status code the upstream answered with
        status: u16,
    },

    /// Failed to parse an upstream response
    #[error("Failed to parse upstream response: {0}")]
    Parse(String),

    /// Every extraction strategy came back empty
    #[error("No songs found in playlist page")]
    NoSongsFound,
}

/// Result type for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
