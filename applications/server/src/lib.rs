//! Mixtape Server Library
//!
//! HTTP API over the playlist store and the catalog client: playlist
//! CRUD, song management, catalog search, and playlist import.
//!
//! This library exposes the core components for testing purposes.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

// Re-export commonly used types for convenience
pub use config::ServerConfig;
pub use error::{Result, ServerError};
pub use state::AppState;
