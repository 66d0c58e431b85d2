//! Domain types for playlists, songs, and catalog results.

mod ids;
mod playlist;
mod song;

pub use ids::{random_id_suffix, synthetic_track_id, PlaylistId, SongId};
pub use playlist::{ImportResult, Playlist, PlaylistSummary};
pub use song::{SearchResult, Song, SongDraft};
