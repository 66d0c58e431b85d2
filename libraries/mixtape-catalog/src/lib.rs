//! Mixtape Catalog
//!
//! Outbound HTTP for Mixtape: free-text song search against the public
//! song catalog, and playlist extraction from the public embed pages of
//! the supported streaming platforms.
//!
//! # Features
//!
//! - **Search**: song search with a fixed page size and artwork upgrades
//! - **Spotify import**: playlist-id extraction plus structured-embed
//!   parsing
//! - **Apple Music import**: reference parsing plus an ordered
//!   three-strategy extraction chain over the embed page
//!
//! Every operation makes exactly one attempt against the upstream host;
//! there are no retries and no caching.
//!
//! # Example
//!
//! ```ignore
//! use mixtape_catalog::{spotify, CatalogClient, CatalogConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CatalogClient::new(CatalogConfig::default())?;
//!
//!     let url = "https://open.spotify.com/playlist/37i9dQZF1DXcBWIGoYBM5M";
//!     let result = spotify::import_playlist(&client, url).await?;
//!     println!("{} has {} songs", result.playlist_name, result.total_tracks);
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod extract;

pub mod applemusic;
pub mod search;
pub mod spotify;

// Re-export main types
pub use client::{CatalogClient, CatalogConfig, BROWSER_USER_AGENT};
pub use error::{CatalogError, Result};
pub use search::SEARCH_LIMIT;
