//! Playlist operations over the flat-file store.
//!
//! Every function here is a read-modify-write composition of the store's
//! two primitives: load the document, mutate in memory, write it back
//! whole. Concurrent callers race as last-writer-wins.

use crate::error::{Result, StoreError};
use crate::store::PlaylistStore;
use mixtape_core::types::{
    random_id_suffix, synthetic_track_id, Playlist, PlaylistId, PlaylistSummary, Song, SongDraft,
    SongId,
};

/// List all playlists as summaries, in stored order
pub async fn list(store: &PlaylistStore) -> Result<Vec<PlaylistSummary>> {
    let playlists = store.read_all().await?;
    Ok(playlists.iter().map(Playlist::summary).collect())
}

/// Create a new, empty playlist. The name is trimmed and must not be
/// blank.
pub async fn create(store: &PlaylistStore, name: &str) -> Result<Playlist> {
    let name = name.trim();
    if name.is_empty() {
        return Err(StoreError::Invalid(
            "Playlist name is required".to_string(),
        ));
    }

    let mut playlists = store.read_all().await?;
    let playlist = Playlist::new(name);
    playlists.push(playlist.clone());
    store.write_all(&playlists).await?;
    Ok(playlist)
}

/// Get a playlist by ID
pub async fn get(store: &PlaylistStore, id: &PlaylistId) -> Result<Option<Playlist>> {
    let playlists = store.read_all().await?;
    Ok(playlists.into_iter().find(|playlist| &playlist.id == id))
}

/// Delete a playlist
pub async fn delete(store: &PlaylistStore, id: &PlaylistId) -> Result<()> {
    let mut playlists = store.read_all().await?;
    let before = playlists.len();
    playlists.retain(|playlist| &playlist.id != id);
    if playlists.len() == before {
        return Err(StoreError::not_found("Playlist", id.as_str()));
    }
    store.write_all(&playlists).await?;
    Ok(())
}

/// Add one song to a playlist. The draft must carry a non-blank track
/// name and artist name; values are stored as given.
pub async fn add_song(store: &PlaylistStore, id: &PlaylistId, draft: SongDraft) -> Result<Song> {
    if draft.track_name.trim().is_empty() || draft.artist_name.trim().is_empty() {
        return Err(StoreError::Invalid(
            "Track name and artist are required".to_string(),
        ));
    }

    let mut playlists = store.read_all().await?;
    let playlist = playlists
        .iter_mut()
        .find(|playlist| &playlist.id == id)
        .ok_or_else(|| StoreError::not_found("Playlist", id.as_str()))?;

    let song = Song::from_draft(draft);
    playlist.songs.push(song.clone());
    store.write_all(&playlists).await?;
    Ok(song)
}

/// Remove one song from a playlist
pub async fn remove_song(store: &PlaylistStore, id: &PlaylistId, song_id: &SongId) -> Result<()> {
    let mut playlists = store.read_all().await?;
    let playlist = playlists
        .iter_mut()
        .find(|playlist| &playlist.id == id)
        .ok_or_else(|| StoreError::not_found("Playlist", id.as_str()))?;

    let before = playlist.songs.len();
    playlist.songs.retain(|song| &song.id != song_id);
    if playlist.songs.len() == before {
        return Err(StoreError::not_found("Song", song_id.as_str()));
    }
    store.write_all(&playlists).await?;
    Ok(())
}

/// Add many songs in one write. Drafts without a track identifier get a
/// synthesized `imported-...` one. An empty input adds nothing. Returns
/// the saved songs in input order.
pub async fn bulk_add(
    store: &PlaylistStore,
    id: &PlaylistId,
    drafts: Vec<SongDraft>,
) -> Result<Vec<Song>> {
    let mut playlists = store.read_all().await?;
    let playlist = playlists
        .iter_mut()
        .find(|playlist| &playlist.id == id)
        .ok_or_else(|| StoreError::not_found("Playlist", id.as_str()))?;

    let mut added = Vec::with_capacity(drafts.len());
    for mut draft in drafts {
        if draft.track_id.as_deref().map_or(true, str::is_empty) {
            draft.track_id = Some(synthetic_track_id("imported", random_id_suffix()));
        }
        let song = Song::from_draft(draft);
        playlist.songs.push(song.clone());
        added.push(song);
    }

    store.write_all(&playlists).await?;
    Ok(added)
}

/// Render a playlist as plain text, one `Artist - Track` line per song
pub async fn export(store: &PlaylistStore, id: &PlaylistId) -> Result<String> {
    let playlist = get(store, id)
        .await?
        .ok_or_else(|| StoreError::not_found("Playlist", id.as_str()))?;

    Ok(playlist
        .songs
        .iter()
        .map(|song| format!("{} - {}", song.artist_name, song.track_name))
        .collect::<Vec<_>>()
        .join("\n"))
}
