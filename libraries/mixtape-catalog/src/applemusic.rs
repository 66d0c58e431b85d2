//! Apple Music playlist import via the public embed page.
//!
//! The embed markup is not stable, so extraction runs through an
//! ordered fallback chain:
//!
//! 1. Linked-data block (`application/ld+json`) with a `track` array
//! 2. Attribute scraping over `data-testid` marked title/subtitle nodes
//! 3. Depth-bounded search of the serialized server-state blob

use crate::client::CatalogClient;
use crate::error::{CatalogError, Result};
use crate::extract::{first_non_empty, Strategy};
use mixtape_core::types::{random_id_suffix, synthetic_track_id, ImportResult, SongDraft};
use scraper::{Html, Selector};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Playlist name used when the page carries none
const DEFAULT_PLAYLIST_NAME: &str = "Apple Music Playlist";

/// Artist name used when a row has a title but no artist
const DEFAULT_ARTIST: &str = "Unknown Artist";

/// Storefront assumed when the reference does not name one
const DEFAULT_STOREFRONT: &str = "us";

/// The server-state blob is undocumented and can nest arbitrarily;
/// recursion stops past this depth.
const MAX_STATE_DEPTH: u32 = 10;

/// Accept header the embed host expects from a browser
const PAGE_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";

/// A parsed Apple Music playlist reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRef {
    /// Two-letter storefront code, `"us"` unless the URL names one
    pub storefront: String,
    /// Catalog playlist id in `pl.<alphanumeric>` form
    pub playlist_id: String,
}

/// Parse user input into a [`PlaylistRef`].
///
/// Accepted shapes:
/// - the bare id: `pl.f4d106fed2bd41149aaacabb233eb5eb`
/// - a catalog URL: `https://music.apple.com/us/playlist/todays-hits/pl.f4d...`
/// - the same URL without a storefront, or on the embed host
pub fn parse_reference(input: &str) -> Option<PlaylistRef> {
    let input = input.trim();
    if is_playlist_id(input) {
        return Some(PlaylistRef {
            storefront: DEFAULT_STOREFRONT.to_string(),
            playlist_id: input.to_string(),
        });
    }

    // Path shape: [storefront/][embed/]playlist/<slug>/<id>
    let (_, path) = input.split_once("music.apple.com/")?;
    let mut segments = path.split('/');
    let mut current = segments.next()?;

    let storefront = if is_storefront(current) {
        let storefront = current;
        current = segments.next()?;
        storefront
    } else {
        DEFAULT_STOREFRONT
    };
    if current == "embed" {
        current = segments.next()?;
    }
    if current != "playlist" {
        return None;
    }

    let slug = segments.next()?;
    if slug.is_empty() {
        return None;
    }
    let id_segment = segments.next()?;
    let playlist_id = id_segment.split('?').next().unwrap_or(id_segment);
    if !is_playlist_id(playlist_id) {
        return None;
    }
    Some(PlaylistRef {
        storefront: storefront.to_string(),
        playlist_id: playlist_id.to_string(),
    })
}

fn is_playlist_id(s: &str) -> bool {
    s.strip_prefix("pl.")
        .map_or(false, |rest| {
            !rest.is_empty() && rest.chars().all(|c| c.is_ascii_alphanumeric())
        })
}

fn is_storefront(s: &str) -> bool {
    s.len() == 2 && s.chars().all(|c| c.is_ascii_lowercase())
}

/// Import a public Apple Music playlist through its embed page.
///
/// Rejects unparseable references before any network activity, then
/// runs the extraction chain over the fetched page. A page yielding no
/// songs from any strategy is [`CatalogError::NoSongsFound`].
pub async fn import_playlist(client: &CatalogClient, input: &str) -> Result<ImportResult> {
    let reference = parse_reference(input).ok_or_else(|| {
        CatalogError::InvalidReference("Invalid Apple Music playlist URL".to_string())
    })?;

    let url = format!(
        "{}/{}/playlist/playlist/{}",
        client.config().applemusic_embed_base_url,
        reference.storefront,
        reference.playlist_id
    );
    let page = client.fetch_page(&url, Some(PAGE_ACCEPT)).await?;

    let songs = first_non_empty(
        &page,
        &[
            Strategy {
                name: "linked-data",
                run: &linked_data_songs,
            },
            Strategy {
                name: "attribute-scrape",
                run: &scraped_songs,
            },
            Strategy {
                name: "state-tree",
                run: &state_tree_songs,
            },
        ],
    );
    if songs.is_empty() {
        return Err(CatalogError::NoSongsFound);
    }

    let playlist_name = linked_data_name(&page)
        .or_else(|| title_name(&page))
        .unwrap_or_else(|| DEFAULT_PLAYLIST_NAME.to_string());

    debug!(playlist = %playlist_name, count = songs.len(), "Apple Music import complete");
    Ok(ImportResult::new(playlist_name, songs))
}

fn linked_data(page: &str) -> Option<Value> {
    let document = Html::parse_document(page);
    let selector = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();
    let script = document.select(&selector).next()?;
    let raw = script.text().collect::<String>();

    match serde_json::from_str(raw.trim()) {
        Ok(data) => Some(data),
        Err(err) => {
            warn!(error = %err, "Linked-data block is not valid JSON");
            None
        }
    }
}

fn linked_data_name(page: &str) -> Option<String> {
    linked_data(page)?
        .get("name")
        .and_then(Value::as_str)
        .and_then(non_empty)
}

/// Linked-data tracks carry no stable ids, so every row gets a
/// synthesized one.
fn linked_data_songs(page: &str) -> Vec<SongDraft> {
    let Some(data) = linked_data(page) else {
        return Vec::new();
    };
    let Some(tracks) = data.get("track").and_then(Value::as_array) else {
        return Vec::new();
    };
    tracks
        .iter()
        .filter_map(|track| {
            let track_name = track.get("name").and_then(Value::as_str).and_then(non_empty)?;
            let artist_name = track
                .pointer("/byArtist/name")
                .and_then(Value::as_str)
                .and_then(non_empty)
                .unwrap_or_else(|| DEFAULT_ARTIST.to_string());
            Some(SongDraft {
                track_id: Some(synthetic_track_id("apple", random_id_suffix())),
                track_name,
                artist_name,
                artwork_url: None,
            })
        })
        .collect()
}

/// Pair the Nth title node with the Nth subtitle node positionally. A
/// missing subtitle at some index does not fail the row.
fn scraped_songs(page: &str) -> Vec<SongDraft> {
    let document = Html::parse_document(page);
    let title_selector = Selector::parse(r#"[data-testid="track-title"]"#).unwrap();
    let subtitle_selector = Selector::parse(r#"[data-testid="track-subtitle"]"#).unwrap();

    let titles: Vec<String> = document
        .select(&title_selector)
        .map(|node| node.text().collect::<String>().trim().to_string())
        .collect();
    let subtitles: Vec<String> = document
        .select(&subtitle_selector)
        .map(|node| node.text().collect::<String>().trim().to_string())
        .collect();

    titles
        .into_iter()
        .enumerate()
        .filter(|(_, title)| !title.is_empty())
        .map(|(index, title)| {
            let artist_name = subtitles
                .get(index)
                .filter(|artist| !artist.is_empty())
                .cloned()
                .unwrap_or_else(|| DEFAULT_ARTIST.to_string());
            SongDraft {
                track_id: Some(synthetic_track_id("apple", index)),
                track_name: title,
                artist_name,
                artwork_url: None,
            }
        })
        .collect()
}

fn state_tree_songs(page: &str) -> Vec<SongDraft> {
    let document = Html::parse_document(page);
    let selector = Selector::parse("script#serialized-server-data").unwrap();
    let Some(script) = document.select(&selector).next() else {
        return Vec::new();
    };
    let raw = script.text().collect::<String>();

    let data: Value = match serde_json::from_str(raw.trim()) {
        Ok(data) => data,
        Err(err) => {
            warn!(error = %err, "Server-state block is not valid JSON");
            return Vec::new();
        }
    };

    let mut songs = Vec::new();
    collect_song_nodes(&data, 0, &mut songs);
    songs
}

/// Pre-order walk collecting every song record in encounter order.
/// Matched nodes are not descended into.
fn collect_song_nodes(value: &Value, depth: u32, songs: &mut Vec<SongDraft>) {
    if depth > MAX_STATE_DEPTH {
        return;
    }
    match value {
        Value::Array(items) => {
            for item in items {
                collect_song_nodes(item, depth + 1, songs);
            }
        }
        Value::Object(map) => {
            if map.get("type").and_then(Value::as_str) == Some("songs") {
                if let Some(attributes) = map.get("attributes").and_then(Value::as_object) {
                    if let Some(draft) = song_node_to_draft(map.get("id"), attributes) {
                        songs.push(draft);
                    }
                    return;
                }
            }
            for child in map.values() {
                collect_song_nodes(child, depth + 1, songs);
            }
        }
        _ => {}
    }
}

fn song_node_to_draft(id: Option<&Value>, attributes: &Map<String, Value>) -> Option<SongDraft> {
    let track_name = attributes
        .get("name")
        .and_then(Value::as_str)
        .and_then(non_empty)?;
    let artist_name = attributes
        .get("artistName")
        .and_then(Value::as_str)
        .and_then(non_empty)?;

    let track_id = id
        .and_then(Value::as_str)
        .and_then(non_empty)
        .unwrap_or_else(|| synthetic_track_id("apple", random_id_suffix()));
    // Artwork URLs come templated with {w}/{h} placeholders.
    let artwork_url = attributes
        .get("artwork")
        .and_then(|artwork| artwork.get("url"))
        .and_then(Value::as_str)
        .map(|url| url.replace("{w}", "200").replace("{h}", "200"));

    Some(SongDraft {
        track_id: Some(track_id),
        track_name,
        artist_name,
        artwork_url,
    })
}

fn title_name(page: &str) -> Option<String> {
    let document = Html::parse_document(page);
    let selector = Selector::parse("title").unwrap();
    let title = document.select(&selector).next()?;
    let text = title.text().collect::<String>();
    non_empty(&text.replace(" - Apple Music", "").replace(" on Apple Music", ""))
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}
