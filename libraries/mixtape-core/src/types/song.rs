/// Song domain types
use crate::types::SongId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A song saved in a playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    /// Unique identifier of this playlist entry
    pub id: SongId,

    /// Identifier of the track in its source catalog, when one exists
    pub track_id: Option<String>,

    /// Track title
    pub track_name: String,

    /// Artist name
    pub artist_name: String,

    /// Artwork image URL
    pub artwork_url: Option<String>,

    /// When the song was added to the playlist
    pub added_at: DateTime<Utc>,
}

impl Song {
    /// Turn a draft into a saved song, assigning the entry id and
    /// added-at timestamp. Only the store calls this; extractors and
    /// searches never assign entry ids.
    pub fn from_draft(draft: SongDraft) -> Self {
        Self {
            id: SongId::generate(),
            track_id: draft.track_id,
            track_name: draft.track_name,
            artist_name: draft.artist_name,
            artwork_url: draft.artwork_url,
            added_at: Utc::now(),
        }
    }
}

/// The canonical not-yet-saved song record.
///
/// Catalog search mapping, every playlist-page extraction strategy, and
/// API request bodies all converge on this shape. `track_name` and
/// `artist_name` are required non-empty; producers skip rows that cannot
/// satisfy that or substitute a default artist where the platform allows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SongDraft {
    /// Source-catalog track identifier, when one exists
    pub track_id: Option<String>,

    /// Track title
    pub track_name: String,

    /// Artist name
    pub artist_name: String,

    /// Artwork image URL
    pub artwork_url: Option<String>,
}

/// A catalog search hit: the draft shape plus the album name, which
/// surfaces in search results but is never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResult {
    /// Source-catalog track identifier
    pub track_id: Option<String>,

    /// Track title
    pub track_name: String,

    /// Artist name
    pub artist_name: String,

    /// Album name
    pub album_name: Option<String>,

    /// Artwork image URL
    pub artwork_url: Option<String>,
}

impl SearchResult {
    /// Drop the album name and keep the persistable fields.
    pub fn into_draft(self) -> SongDraft {
        SongDraft {
            track_id: self.track_id,
            track_name: self.track_name,
            artist_name: self.artist_name,
            artwork_url: self.artwork_url,
        }
    }
}
