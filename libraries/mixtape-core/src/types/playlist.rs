/// Playlist domain types
use crate::types::{PlaylistId, Song, SongDraft};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Playlist {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Saved songs, in insertion order
    pub songs: Vec<Song>,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Playlist {
    /// Create a new, empty playlist
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: PlaylistId::generate(),
            name: name.into(),
            songs: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Project to the listing shape
    pub fn summary(&self) -> PlaylistSummary {
        PlaylistSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            song_count: self.songs.len(),
            created_at: self.created_at,
        }
    }
}

/// Playlist listing entry: everything but the songs themselves
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistSummary {
    /// Unique playlist identifier
    pub id: PlaylistId,

    /// Playlist name
    pub name: String,

    /// Number of saved songs
    pub song_count: usize,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// The outcome of extracting a playlist from a streaming platform page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportResult {
    /// Playlist name as published, or the platform default
    pub playlist_name: String,

    /// Extracted songs, in page order
    pub songs: Vec<SongDraft>,

    /// Number of extracted songs
    pub total_tracks: usize,
}

impl ImportResult {
    /// Bundle extracted songs with their playlist name
    pub fn new(playlist_name: impl Into<String>, songs: Vec<SongDraft>) -> Self {
        let total_tracks = songs.len();
        Self {
            playlist_name: playlist_name.into(),
            songs,
            total_tracks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_creation() {
        let playlist = Playlist::new("My Favorites");
        assert_eq!(playlist.name, "My Favorites");
        assert!(playlist.songs.is_empty());
        assert!(playlist.created_at <= Utc::now());
    }

    #[test]
    fn summary_counts_songs() {
        let mut playlist = Playlist::new("Counted");
        playlist.songs.push(Song::from_draft(SongDraft {
            track_id: None,
            track_name: "One".to_string(),
            artist_name: "Artist".to_string(),
            artwork_url: None,
        }));

        let summary = playlist.summary();
        assert_eq!(summary.song_count, 1);
        assert_eq!(summary.name, "Counted");
        assert_eq!(summary.id, playlist.id);
    }

    #[test]
    fn import_result_counts_tracks() {
        let songs = vec![
            SongDraft {
                track_id: Some("a".to_string()),
                track_name: "One".to_string(),
                artist_name: "Artist".to_string(),
                artwork_url: None,
            },
            SongDraft {
                track_id: Some("b".to_string()),
                track_name: "Two".to_string(),
                artist_name: "Artist".to_string(),
                artwork_url: None,
            },
        ];
        let result = ImportResult::new("Imported", songs);
        assert_eq!(result.total_tracks, 2);
        assert_eq!(result.songs.len(), 2);
    }

    #[test]
    fn summaries_serialize_with_camel_case_keys() {
        let summary = Playlist::new("Keys").summary();
        let value = serde_json::to_value(&summary).unwrap();
        assert!(value.get("songCount").is_some());
        assert!(value.get("createdAt").is_some());
    }
}
