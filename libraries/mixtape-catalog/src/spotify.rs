//! Spotify playlist import via the public embed page.

use crate::client::CatalogClient;
use crate::error::{CatalogError, Result};
use crate::extract::{first_non_empty, Strategy};
use mixtape_core::types::{random_id_suffix, synthetic_track_id, ImportResult, SongDraft};
use scraper::{Html, Selector};
use serde_json::Value;
use tracing::{debug, warn};

/// Playlist name used when the page carries none
const DEFAULT_PLAYLIST_NAME: &str = "Spotify Playlist";

/// Spotify playlist ids are exactly this long
const PLAYLIST_ID_LEN: usize = 22;

/// Pull the playlist id out of user input.
///
/// Accepted shapes:
/// - the bare id: `37i9dQZF1DXcBWIGoYBM5M`
/// - a share URL: `https://open.spotify.com/playlist/<id>?si=...`
/// - a URI: `spotify:playlist:<id>`
///
/// The id must be a whole 22-character alphanumeric segment; anything
/// else is `None`.
pub fn extract_playlist_id(input: &str) -> Option<String> {
    let input = input.trim();
    if is_playlist_id(input) {
        return Some(input.to_string());
    }

    // In URLs and URIs the id is the segment right after "playlist".
    let segments: Vec<&str> = input.split(['/', ':']).collect();
    for window in segments.windows(2) {
        if window[0] == "playlist" {
            let candidate = window[1].split('?').next().unwrap_or(window[1]);
            if is_playlist_id(candidate) {
                return Some(candidate.to_string());
            }
        }
    }
    None
}

fn is_playlist_id(s: &str) -> bool {
    s.len() == PLAYLIST_ID_LEN && s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Import a public Spotify playlist through its embed page.
///
/// Rejects unparseable references before any network activity. The
/// fetched page is parsed by the single structured-embed strategy; a
/// page yielding no songs is [`CatalogError::NoSongsFound`].
pub async fn import_playlist(client: &CatalogClient, input: &str) -> Result<ImportResult> {
    let playlist_id = extract_playlist_id(input).ok_or_else(|| {
        CatalogError::InvalidReference("Invalid Spotify playlist URL".to_string())
    })?;

    let url = format!(
        "{}/{}",
        client.config().spotify_embed_base_url,
        playlist_id
    );
    let page = client.fetch_page(&url, None).await?;

    let songs = first_non_empty(
        &page,
        &[Strategy {
            name: "structured-embed",
            run: &embed_songs,
        }],
    );
    if songs.is_empty() {
        return Err(CatalogError::NoSongsFound);
    }

    let playlist_name =
        embed_playlist_name(&page).unwrap_or_else(|| DEFAULT_PLAYLIST_NAME.to_string());

    debug!(playlist = %playlist_name, count = songs.len(), "Spotify import complete");
    Ok(ImportResult::new(playlist_name, songs))
}

/// The embed page ships its state as a JSON document in a script tag;
/// the playlist entity sits at a fixed path inside it.
fn embed_entity(page: &str) -> Option<Value> {
    let document = Html::parse_document(page);
    let selector = Selector::parse("script#__NEXT_DATA__").unwrap();
    let script = document.select(&selector).next()?;
    let raw = script.text().collect::<String>();

    let data: Value = match serde_json::from_str(raw.trim()) {
        Ok(data) => data,
        Err(err) => {
            warn!(error = %err, "Embed state is not valid JSON");
            return None;
        }
    };
    data.pointer("/props/pageProps/state/data/entity").cloned()
}

fn embed_playlist_name(page: &str) -> Option<String> {
    embed_entity(page)?
        .get("name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(ToString::to_string)
}

fn embed_songs(page: &str) -> Vec<SongDraft> {
    let Some(entity) = embed_entity(page) else {
        return Vec::new();
    };
    let Some(track_list) = entity.get("trackList").and_then(Value::as_array) else {
        return Vec::new();
    };
    track_list.iter().filter_map(track_to_draft).collect()
}

/// Accept a track only when uri, title, and subtitle are all present
/// and non-empty.
fn track_to_draft(track: &Value) -> Option<SongDraft> {
    let uri = non_empty_string(track.get("uri"))?;
    let title = non_empty_string(track.get("title"))?;
    let subtitle = non_empty_string(track.get("subtitle"))?;

    let track_id = non_empty_string(track.get("uid"))
        .or_else(|| {
            uri.rsplit(':')
                .next()
                .filter(|id| !id.is_empty())
                .map(ToString::to_string)
        })
        .unwrap_or_else(|| synthetic_track_id("spotify", random_id_suffix()));

    let artwork_url = first_image_url(track.get("album").and_then(|album| album.get("images")))
        .or_else(|| first_image_url(track.get("images")));

    Some(SongDraft {
        track_id: Some(track_id),
        track_name: title,
        artist_name: subtitle,
        artwork_url,
    })
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}

fn first_image_url(images: Option<&Value>) -> Option<String> {
    images?
        .as_array()?
        .first()?
        .get("url")?
        .as_str()
        .map(ToString::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const ID: &str = "37i9dQZF1DXcBWIGoYBM5M";

    fn embed_page(entity: &Value) -> String {
        let state = json!({
            "props": { "pageProps": { "state": { "data": { "entity": entity } } } }
        });
        format!(
            "<html><head></head><body>\
             <script id=\"__NEXT_DATA__\" type=\"application/json\">{}</script>\
             </body></html>",
            state
        )
    }

    #[test]
    fn bare_id_is_accepted() {
        assert_eq!(extract_playlist_id(ID).as_deref(), Some(ID));
    }

    #[test]
    fn share_url_is_accepted() {
        let url = format!("https://open.spotify.com/playlist/{}?si=abc123", ID);
        assert_eq!(extract_playlist_id(&url).as_deref(), Some(ID));
    }

    #[test]
    fn uri_is_accepted() {
        let uri = format!("spotify:playlist:{}", ID);
        assert_eq!(extract_playlist_id(&uri).as_deref(), Some(ID));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let padded = format!("  {}  ", ID);
        assert_eq!(extract_playlist_id(&padded).as_deref(), Some(ID));
    }

    #[test]
    fn wrong_length_ids_are_rejected() {
        assert_eq!(extract_playlist_id("tooshort"), None);
        assert_eq!(
            extract_playlist_id("https://open.spotify.com/playlist/short"),
            None
        );
        // 25 alphanumeric chars: not a valid whole segment.
        assert_eq!(
            extract_playlist_id("https://open.spotify.com/playlist/aaaaaaaaaaaaaaaaaaaaaaXYZ"),
            None
        );
    }

    #[test]
    fn unrelated_input_is_rejected() {
        assert_eq!(extract_playlist_id("not a playlist at all"), None);
        assert_eq!(extract_playlist_id("https://example.com/xyz"), None);
        assert_eq!(extract_playlist_id(""), None);
    }

    #[test]
    fn embed_songs_maps_complete_tracks() {
        let entity = json!({
            "name": "Summer Mix",
            "trackList": [
                {
                    "uri": "spotify:track:4uLU6hMCjMI75M1A2tKUQC",
                    "uid": "uid-1",
                    "title": "Dreams",
                    "subtitle": "Fleetwood Mac",
                    "album": { "images": [{ "url": "https://img.example/album.jpg" }] }
                },
                {
                    "uri": "spotify:track:7ouMYWpwJ422jRcDASZB7P",
                    "title": "Numb",
                    "subtitle": "Linkin Park",
                    "images": [{ "url": "https://img.example/track.jpg" }]
                },
                { "uri": "spotify:track:missingtitle", "subtitle": "No Title" }
            ]
        });
        let page = embed_page(&entity);

        let songs = embed_songs(&page);

        assert_eq!(songs.len(), 2);
        assert_eq!(songs[0].track_id.as_deref(), Some("uid-1"));
        assert_eq!(songs[0].track_name, "Dreams");
        assert_eq!(
            songs[0].artwork_url.as_deref(),
            Some("https://img.example/album.jpg")
        );
        // No uid: the id falls back to the last uri segment.
        assert_eq!(
            songs[1].track_id.as_deref(),
            Some("7ouMYWpwJ422jRcDASZB7P")
        );
        assert_eq!(
            songs[1].artwork_url.as_deref(),
            Some("https://img.example/track.jpg")
        );
    }

    #[test]
    fn embed_name_is_read_from_the_entity() {
        let entity = json!({ "name": "Summer Mix", "trackList": [] });
        let page = embed_page(&entity);
        assert_eq!(embed_playlist_name(&page).as_deref(), Some("Summer Mix"));
    }

    #[test]
    fn pages_without_embed_state_yield_nothing() {
        assert!(embed_songs("<html><body>plain page</body></html>").is_empty());
        assert_eq!(embed_playlist_name("<html></html>"), None);
    }

    #[test]
    fn malformed_embed_state_yields_nothing() {
        let page = "<html><script id=\"__NEXT_DATA__\" type=\"application/json\">{broken</script></html>";
        assert!(embed_songs(page).is_empty());
    }
}
