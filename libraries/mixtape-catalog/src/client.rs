//! HTTP client for catalog and playlist-page fetches.

use crate::error::{CatalogError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// Desktop-browser user agent presented on every request. The playlist
/// embed hosts serve reduced markup to clients that do not look like a
/// browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Endpoints and limits for the catalog client.
///
/// The base URLs exist so tests can point the client at a local mock
/// server; production code uses [`CatalogConfig::default`].
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Per-request timeout
    pub request_timeout: Duration,

    /// Song search endpoint
    pub search_base_url: String,

    /// Spotify playlist embed endpoint
    pub spotify_embed_base_url: String,

    /// Apple Music embed host
    pub applemusic_embed_base_url: String,
}

impl CatalogConfig {
    /// Production endpoints with the given request timeout
    pub fn with_timeout(request_timeout: Duration) -> Self {
        Self {
            request_timeout,
            ..Self::default()
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(20),
            search_base_url: "https://itunes.apple.com/search".to_string(),
            spotify_embed_base_url: "https://open.spotify.com/embed/playlist".to_string(),
            applemusic_embed_base_url: "https://embed.music.apple.com".to_string(),
        }
    }
}

/// Client for the outbound half of Mixtape: catalog search requests and
/// playlist embed-page fetches.
///
/// Every call makes exactly one attempt; failures surface immediately
/// and nothing is retried or cached.
pub struct CatalogClient {
    http: Client,
    config: CatalogConfig,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(BROWSER_USER_AGENT)
            .build()?;

        Ok(Self { http, config })
    }

    /// The active configuration.
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Fetch a page as text, optionally with an explicit Accept header.
    ///
    /// Non-success statuses become [`CatalogError::UpstreamStatus`].
    pub(crate) async fn fetch_page(&self, url: &str, accept: Option<&str>) -> Result<String> {
        debug!(url = %url, "Fetching page");

        let mut request = self.http.get(url);
        if let Some(accept) = accept {
            request = request.header(reqwest::header::ACCEPT, accept);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        Ok(response.text().await?)
    }

    /// GET a JSON document with query parameters.
    pub(crate) async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        debug!(url = %url, "Fetching JSON");

        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| CatalogError::Parse(format!("Failed to parse response body: {}", e)))
    }
}
