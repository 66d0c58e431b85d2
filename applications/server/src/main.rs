/// Mixtape Server - playlist collection and import server
use axum::{
    routing::{delete, get, post},
    Router,
};
use clap::{Parser, Subcommand};
use mixtape_catalog::{CatalogClient, CatalogConfig};
use mixtape_core::types::PlaylistId;
use mixtape_server::{api, config::ServerConfig, state::AppState};
use mixtape_storage::PlaylistStore;
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mixtape-server")]
#[command(about = "Mixtape playlist collection and import server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Print a playlist as "Artist - Track" lines
    Export {
        /// Playlist ID
        playlist: String,
        /// Configuration file path
        #[arg(short, long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mixtape_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config.as_deref()).await?;
        }
        Commands::Export { playlist, config } => {
            export_playlist(&playlist, config.as_deref()).await?;
        }
    }

    Ok(())
}

async fn serve(config_path: Option<&str>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    tracing::info!("Starting Mixtape Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize the playlist store
    let store = Arc::new(PlaylistStore::new(config.storage.data_file.clone()));
    tracing::info!("Playlist store at {}", store.path().display());

    // Initialize the catalog client
    let catalog = CatalogClient::new(CatalogConfig::with_timeout(Duration::from_secs(
        config.catalog.request_timeout_secs,
    )))?;
    let catalog = Arc::new(catalog);
    tracing::info!("Catalog client initialized");

    // Build application state
    let app_state = AppState::new(store, catalog);

    // Build router
    let app = create_router(app_state);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn create_router(app_state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(api::health::health))
        // Playlists
        .route("/playlists", get(api::playlists::list_playlists))
        .route("/playlists", post(api::playlists::create_playlist))
        .route("/playlists/:id", get(api::playlists::get_playlist))
        .route("/playlists/:id", delete(api::playlists::delete_playlist))
        .route("/playlists/:id/songs", post(api::playlists::add_song))
        .route(
            "/playlists/:id/songs/bulk",
            post(api::playlists::bulk_add_songs),
        )
        .route(
            "/playlists/:id/songs/:song_id",
            delete(api::playlists::remove_song),
        )
        .route(
            "/playlists/:id/export",
            get(api::playlists::export_playlist),
        )
        // Catalog
        .route("/search", get(api::search::search_songs))
        .route(
            "/spotify/playlist",
            get(api::imports::import_spotify_playlist),
        )
        .route(
            "/applemusic/playlist",
            get(api::imports::import_applemusic_playlist),
        );

    Router::new()
        .nest("/api", api_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive())
        .with_state(app_state)
}

async fn export_playlist(playlist_id: &str, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = ServerConfig::load(config_path)?;
    config.validate()?;

    let store = PlaylistStore::new(config.storage.data_file.clone());
    let text = mixtape_storage::playlists::export(&store, &PlaylistId::new(playlist_id)).await?;

    println!("{}", text);

    Ok(())
}
