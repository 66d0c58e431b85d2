/// Playlists API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use mixtape_core::types::{Playlist, PlaylistId, PlaylistSummary, Song, SongDraft, SongId};
use mixtape_storage::playlists;
use serde::Deserialize;
use serde_json::json;

/// Body for playlist creation. The name is validated by the store, so a
/// missing field flows through as blank rather than failing extraction.
#[derive(Debug, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: Option<String>,
}

/// Body for adding one song, also the row shape for bulk adds
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddSongRequest {
    pub track_id: Option<String>,
    pub track_name: Option<String>,
    pub artist_name: Option<String>,
    pub artwork_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BulkAddRequest {
    pub songs: Option<Vec<AddSongRequest>>,
}

/// GET /api/playlists
/// List all playlists as summaries
pub async fn list_playlists(
    State(app_state): State<AppState>,
) -> Result<Json<Vec<PlaylistSummary>>> {
    let summaries = playlists::list(&app_state.store).await?;
    Ok(Json(summaries))
}

/// POST /api/playlists
/// Create a new playlist
pub async fn create_playlist(
    State(app_state): State<AppState>,
    Json(req): Json<CreatePlaylistRequest>,
) -> Result<(StatusCode, Json<Playlist>)> {
    let name = req.name.unwrap_or_default();
    let playlist = playlists::create(&app_state.store, &name).await?;
    Ok((StatusCode::CREATED, Json(playlist)))
}

/// GET /api/playlists/:id
/// Get playlist details with songs
pub async fn get_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<Playlist>> {
    let playlist_id = PlaylistId::new(id);
    let playlist = playlists::get(&app_state.store, &playlist_id)
        .await?
        .ok_or_else(|| ServerError::NotFound("Playlist not found".to_string()))?;

    Ok(Json(playlist))
}

/// DELETE /api/playlists/:id
/// Delete a playlist and its songs
pub async fn delete_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);
    playlists::delete(&app_state.store, &playlist_id).await?;
    Ok(Json(json!({ "success": true })))
}

/// POST /api/playlists/:id/songs
/// Add one song to a playlist
pub async fn add_song(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Json(req): Json<AddSongRequest>,
) -> Result<(StatusCode, Json<Song>)> {
    let playlist_id = PlaylistId::new(id);
    let draft = SongDraft {
        track_id: req.track_id,
        track_name: req.track_name.unwrap_or_default(),
        artist_name: req.artist_name.unwrap_or_default(),
        artwork_url: req.artwork_url,
    };

    let song = playlists::add_song(&app_state.store, &playlist_id, draft).await?;
    Ok((StatusCode::CREATED, Json(song)))
}

/// DELETE /api/playlists/:id/songs/:song_id
/// Remove one song from a playlist
pub async fn remove_song(
    Path((id, song_id)): Path<(String, String)>,
    State(app_state): State<AppState>,
) -> Result<Json<serde_json::Value>> {
    let playlist_id = PlaylistId::new(id);
    let song_id = SongId::new(song_id);
    playlists::remove_song(&app_state.store, &playlist_id, &song_id).await?;
    Ok(Json(json!({ "success": true })))
}

/// POST /api/playlists/:id/songs/bulk
/// Add many songs in one write, typically straight from an import.
/// Rows without a usable track name and artist are skipped.
pub async fn bulk_add_songs(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
    Json(req): Json<BulkAddRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>)> {
    let songs = req.songs.unwrap_or_default();
    if songs.is_empty() {
        return Err(ServerError::BadRequest(
            "Songs array is required".to_string(),
        ));
    }

    let drafts: Vec<SongDraft> = songs
        .into_iter()
        .filter_map(|song| {
            let track_name = song.track_name.filter(|name| !name.trim().is_empty())?;
            let artist_name = song.artist_name.filter(|name| !name.trim().is_empty())?;
            Some(SongDraft {
                track_id: song.track_id,
                track_name,
                artist_name,
                artwork_url: song.artwork_url,
            })
        })
        .collect();

    let playlist_id = PlaylistId::new(id);
    let added = playlists::bulk_add(&app_state.store, &playlist_id, drafts).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "added": added.len(),
            "songs": added,
        })),
    ))
}

/// GET /api/playlists/:id/export
/// Render the playlist as plain text, one "Artist - Track" line per song
pub async fn export_playlist(
    Path(id): Path<String>,
    State(app_state): State<AppState>,
) -> Result<Response> {
    let playlist_id = PlaylistId::new(id);
    let text = playlists::export(&app_state.store, &playlist_id).await?;

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        text,
    )
        .into_response())
}
