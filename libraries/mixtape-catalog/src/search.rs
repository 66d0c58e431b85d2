//! Free-text song search against the public song catalog.

use crate::client::CatalogClient;
use crate::error::{CatalogError, Result};
use mixtape_core::types::SearchResult;
use serde::Deserialize;
use tracing::debug;

/// Fixed number of results per search. The catalog is always asked for
/// exactly this many; paging is not supported.
pub const SEARCH_LIMIT: u32 = 20;

#[derive(Debug, Deserialize)]
struct CatalogSearchResponse {
    #[serde(default)]
    results: Vec<CatalogTrack>,
}

/// One raw catalog hit, before mapping onto the canonical shape
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CatalogTrack {
    track_id: Option<i64>,
    track_name: Option<String>,
    artist_name: Option<String>,
    collection_name: Option<String>,
    artwork_url100: Option<String>,
    artwork_url60: Option<String>,
}

impl CatalogTrack {
    /// Map a raw hit onto the canonical shape. Hits without a usable
    /// track name or artist name are dropped. Artwork is upgraded to
    /// the 200x200 rendition when the 100x100 one is present.
    fn into_result(self) -> Option<SearchResult> {
        let track_name = self.track_name.filter(|name| !name.trim().is_empty())?;
        let artist_name = self.artist_name.filter(|name| !name.trim().is_empty())?;

        let artwork_url = match self.artwork_url100 {
            Some(url) => Some(url.replace("100x100", "200x200")),
            None => self.artwork_url60,
        };

        Some(SearchResult {
            track_id: self.track_id.map(|id| id.to_string()),
            track_name,
            artist_name,
            album_name: self.collection_name,
            artwork_url,
        })
    }
}

/// Search the catalog for songs matching a free-text query.
///
/// A blank query is [`CatalogError::InvalidInput`], raised before any
/// network activity. One attempt, no retries.
pub async fn search(client: &CatalogClient, query: &str) -> Result<Vec<SearchResult>> {
    let query = query.trim();
    if query.is_empty() {
        return Err(CatalogError::InvalidInput(
            "Search query is required".to_string(),
        ));
    }

    let limit = SEARCH_LIMIT.to_string();
    let response: CatalogSearchResponse = client
        .get_json(
            &client.config().search_base_url,
            &[
                ("term", query),
                ("media", "music"),
                ("entity", "song"),
                ("limit", limit.as_str()),
            ],
        )
        .await?;

    let results: Vec<SearchResult> = response
        .results
        .into_iter()
        .filter_map(CatalogTrack::into_result)
        .collect();

    debug!(query = %query, count = results.len(), "Catalog search complete");
    Ok(results)
}
