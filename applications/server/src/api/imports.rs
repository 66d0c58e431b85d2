/// Playlist import API routes
use crate::{error::Result, error::ServerError, state::AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use mixtape_catalog::{applemusic, spotify};
use mixtape_core::types::ImportResult;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct ImportParams {
    pub url: Option<String>,
}

/// GET /api/spotify/playlist?url=
/// Import a public Spotify playlist through its embed page
pub async fn import_spotify_playlist(
    Query(params): Query<ImportParams>,
    State(app_state): State<AppState>,
) -> Result<Json<ImportResult>> {
    let url = params.url.filter(|url| !url.is_empty()).ok_or_else(|| {
        ServerError::BadRequest("Spotify playlist URL is required".to_string())
    })?;

    let result = spotify::import_playlist(&app_state.catalog, &url).await?;
    Ok(Json(result))
}

/// GET /api/applemusic/playlist?url=
/// Import a public Apple Music playlist through its embed page
pub async fn import_applemusic_playlist(
    Query(params): Query<ImportParams>,
    State(app_state): State<AppState>,
) -> Result<Json<ImportResult>> {
    let url = params.url.filter(|url| !url.is_empty()).ok_or_else(|| {
        ServerError::BadRequest("Apple Music playlist URL is required".to_string())
    })?;

    let result = applemusic::import_playlist(&app_state.catalog, &url).await?;
    Ok(Json(result))
}
