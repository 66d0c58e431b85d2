/// Catalog search API routes
use crate::{error::Result, state::AppState};
use axum::{
    extract::{Query, State},
    Json,
};
use mixtape_core::types::SearchResult;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/search?q=
/// Free-text song search against the catalog. A missing or blank query
/// is rejected by the catalog client before any request goes out.
pub async fn search_songs(
    Query(params): Query<SearchParams>,
    State(app_state): State<AppState>,
) -> Result<Json<Vec<SearchResult>>> {
    let query = params.q.unwrap_or_default();
    let results = mixtape_catalog::search::search(&app_state.catalog, &query).await?;
    Ok(Json(results))
}
