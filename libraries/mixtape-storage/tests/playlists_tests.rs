//! Integration tests for the playlists vertical slice
//!
//! Covers:
//! - CRUD over the flat-file document
//! - Name/field validation
//! - Song add/remove with entry-id assignment
//! - Bulk add with synthesized track identifiers
//! - Plain-text export


use mixtape_core::types::{PlaylistId, SongDraft, SongId};
use mixtape_storage::{playlists, StoreError};
use test_helpers::TestStore;

fn draft(track: &str, artist: &str) -> SongDraft {
    SongDraft {
        track_id: Some(format!("id-{}", track)),
        track_name: track.to_string(),
        artist_name: artist.to_string(),
        artwork_url: None,
    }
}

#[tokio::test]
async fn test_create_and_get_playlist() {
    let test_store = TestStore::new().await;
    let store = test_store.store();

    let playlist = playlists::create(store, "My Favorites")
        .await
        .expect("Failed to create playlist");

    assert_eq!(playlist.name, "My Favorites");
    assert!(playlist.songs.is_empty());

    let retrieved = playlists::get(store, &playlist.id)
        .await
        .unwrap()
        .expect("Playlist should exist");
    assert_eq!(retrieved.id, playlist.id);
    assert_eq!(retrieved.name, "My Favorites");
}

#[tokio::test]
async fn test_create_trims_playlist_name() {
    let test_store = TestStore::new().await;

    let playlist = playlists::create(test_store.store(), "  Road Trip  ")
        .await
        .unwrap();

    assert_eq!(playlist.name, "Road Trip");
}

#[tokio::test]
async fn test_create_rejects_blank_name() {
    let test_store = TestStore::new().await;

    let result = playlists::create(test_store.store(), "   ").await;

    match result.unwrap_err() {
        StoreError::Invalid(_) => {}
        e => panic!("Expected Invalid error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_list_returns_summaries_in_stored_order() {
    let test_store = TestStore::new().await;
    let store = test_store.store();

    let first = playlists::create(store, "First").await.unwrap();
    let second = playlists::create(store, "Second").await.unwrap();
    playlists::add_song(store, &second.id, draft("Dreams", "Fleetwood Mac"))
        .await
        .unwrap();

    let summaries = playlists::list(store).await.unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].id, first.id);
    assert_eq!(summaries[0].song_count, 0);
    assert_eq!(summaries[1].id, second.id);
    assert_eq!(summaries[1].song_count, 1);
}

#[tokio::test]
async fn test_delete_removes_playlist() {
    let test_store = TestStore::new().await;
    let store = test_store.store();

    let playlist = playlists::create(store, "Doomed").await.unwrap();
    playlists::delete(store, &playlist.id)
        .await
        .expect("Failed to delete");

    assert!(playlists::get(store, &playlist.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_playlist_is_not_found() {
    let test_store = TestStore::new().await;

    let result = playlists::delete(test_store.store(), &PlaylistId::new("missing")).await;

    match result.unwrap_err() {
        StoreError::NotFound { .. } => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_add_song_assigns_entry_id_and_timestamp() {
    let test_store = TestStore::new().await;
    let store = test_store.store();

    let playlist = playlists::create(store, "Mix").await.unwrap();
    let song = playlists::add_song(store, &playlist.id, draft("Dreams", "Fleetwood Mac"))
        .await
        .expect("Failed to add song");

    assert!(!song.id.as_str().is_empty());
    assert_eq!(song.track_name, "Dreams");

    let stored = playlists::get(store, &playlist.id).await.unwrap().unwrap();
    assert_eq!(stored.songs.len(), 1);
    assert_eq!(stored.songs[0], song);
}

#[tokio::test]
async fn test_add_song_requires_name_and_artist() {
    let test_store = TestStore::new().await;
    let store = test_store.store();

    let playlist = playlists::create(store, "Mix").await.unwrap();
    let result = playlists::add_song(store, &playlist.id, draft("Dreams", "   ")).await;

    match result.unwrap_err() {
        StoreError::Invalid(_) => {}
        e => panic!("Expected Invalid error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_add_song_to_missing_playlist_is_not_found() {
    let test_store = TestStore::new().await;

    let result = playlists::add_song(
        test_store.store(),
        &PlaylistId::new("missing"),
        draft("Dreams", "Fleetwood Mac"),
    )
    .await;

    match result.unwrap_err() {
        StoreError::NotFound { .. } => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_remove_song_removes_only_that_song() {
    let test_store = TestStore::new().await;
    let store = test_store.store();

    let playlist = playlists::create(store, "Mix").await.unwrap();
    let keep = playlists::add_song(store, &playlist.id, draft("Keep", "Artist"))
        .await
        .unwrap();
    let doomed = playlists::add_song(store, &playlist.id, draft("Drop", "Artist"))
        .await
        .unwrap();

    playlists::remove_song(store, &playlist.id, &doomed.id)
        .await
        .expect("Failed to remove song");

    let stored = playlists::get(store, &playlist.id).await.unwrap().unwrap();
    assert_eq!(stored.songs.len(), 1);
    assert_eq!(stored.songs[0].id, keep.id);
}

#[tokio::test]
async fn test_remove_missing_song_is_not_found() {
    let test_store = TestStore::new().await;
    let store = test_store.store();

    let playlist = playlists::create(store, "Mix").await.unwrap();
    let result = playlists::remove_song(store, &playlist.id, &SongId::new("missing")).await;

    match result.unwrap_err() {
        StoreError::NotFound { .. } => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}

#[tokio::test]
async fn test_bulk_add_synthesizes_missing_track_ids() {
    let test_store = TestStore::new().await;
    let store = test_store.store();

    let playlist = playlists::create(store, "Imported").await.unwrap();
    let drafts = vec![
        SongDraft {
            track_id: Some("kept-id".to_string()),
            track_name: "One".to_string(),
            artist_name: "Artist".to_string(),
            artwork_url: Some("https://example.com/1.jpg".to_string()),
        },
        SongDraft {
            track_id: None,
            track_name: "Two".to_string(),
            artist_name: "Artist".to_string(),
            artwork_url: None,
        },
        SongDraft {
            track_id: Some(String::new()),
            track_name: "Three".to_string(),
            artist_name: "Artist".to_string(),
            artwork_url: None,
        },
    ];

    let added = playlists::bulk_add(store, &playlist.id, drafts)
        .await
        .expect("Failed to bulk add");

    assert_eq!(added.len(), 3);
    assert_eq!(added[0].track_id.as_deref(), Some("kept-id"));
    assert!(added[1].track_id.as_deref().unwrap().starts_with("imported-"));
    assert!(added[2].track_id.as_deref().unwrap().starts_with("imported-"));

    // Input order and metadata preserved, entry ids distinct.
    let names: Vec<&str> = added.iter().map(|s| s.track_name.as_str()).collect();
    assert_eq!(names, vec!["One", "Two", "Three"]);
    assert_ne!(added[0].id, added[1].id);
    assert_eq!(
        added[0].artwork_url.as_deref(),
        Some("https://example.com/1.jpg")
    );

    let stored = playlists::get(store, &playlist.id).await.unwrap().unwrap();
    assert_eq!(stored.songs.len(), 3);
}

#[tokio::test]
async fn test_bulk_add_with_empty_input_adds_nothing() {
    let test_store = TestStore::new().await;
    let store = test_store.store();

    let playlist = playlists::create(store, "Empty").await.unwrap();
    let added = playlists::bulk_add(store, &playlist.id, Vec::new())
        .await
        .unwrap();

    assert!(added.is_empty());
    let stored = playlists::get(store, &playlist.id).await.unwrap().unwrap();
    assert!(stored.songs.is_empty());
}

#[tokio::test]
async fn test_export_formats_artist_dash_track_lines() {
    let test_store = TestStore::new().await;
    let store = test_store.store();

    let playlist = playlists::create(store, "Mix").await.unwrap();
    playlists::add_song(store, &playlist.id, draft("Dreams", "Fleetwood Mac"))
        .await
        .unwrap();
    playlists::add_song(store, &playlist.id, draft("Levitating", "Dua Lipa"))
        .await
        .unwrap();

    let text = playlists::export(store, &playlist.id).await.unwrap();

    assert_eq!(text, "Fleetwood Mac - Dreams\nDua Lipa - Levitating");
}

#[tokio::test]
async fn test_export_missing_playlist_is_not_found() {
    let test_store = TestStore::new().await;

    let result = playlists::export(test_store.store(), &PlaylistId::new("missing")).await;

    match result.unwrap_err() {
        StoreError::NotFound { .. } => {}
        e => panic!("Expected NotFound error, got: {:?}", e),
    }
}
