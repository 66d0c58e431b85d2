//! Mixtape Core
//!
//! Domain types shared by the mixtape storage, catalog, and server crates.
//!
//! The central shape is the [`SongDraft`]: the not-yet-saved song record
//! that catalog searches, playlist-page extraction, and API request bodies
//! all converge on. The store turns drafts into saved [`Song`]s by
//! assigning the id and timestamp.
//!
//! # Example
//!
//! ```rust
//! use mixtape_core::types::{Playlist, Song, SongDraft};
//!
//! let mut playlist = Playlist::new("Road Trip");
//!
//! let draft = SongDraft {
//!     track_id: Some("12345".to_string()),
//!     track_name: "Go Your Own Way".to_string(),
//!     artist_name: "Fleetwood Mac".to_string(),
//!     artwork_url: None,
//! };
//! playlist.songs.push(Song::from_draft(draft));
//!
//! assert_eq!(playlist.summary().song_count, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

// Re-export commonly used types
pub use types::{
    random_id_suffix, synthetic_track_id, ImportResult, Playlist, PlaylistId, PlaylistSummary,
    SearchResult, Song, SongDraft, SongId,
};
