//! Mixtape Storage
//!
//! Flat-file JSON persistence for playlists.
//!
//! The whole playlist library lives in a single JSON document on disk.
//!
//! # Architecture
//!
//! - **Two primitives**: [`PlaylistStore::read_all`] and
//!   [`PlaylistStore::write_all`] are the only persistence operations
//! - **Read-modify-write**: every operation in [`playlists`] loads the
//!   document, mutates it in memory, and writes it back whole
//! - **Last-writer-wins**: concurrent writers race; the final write
//!   replaces the document and a lost update between read and write is
//!   accepted
//!
//! # Example
//!
//! ```rust,no_run
//! use mixtape_storage::{playlists, PlaylistStore};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let store = PlaylistStore::new("./data/playlists.json");
//!
//! let playlist = playlists::create(&store, "Road Trip").await?;
//! let all = playlists::list(&store).await?;
//! assert_eq!(all.len(), 1);
//! # let _ = playlist;
//! # Ok(())
//! # }
//! ```

mod error;
mod store;

// Vertical slices
pub mod playlists;

pub use error::{Result, StoreError};
pub use store::PlaylistStore;
