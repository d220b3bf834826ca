pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use namecard_core::{default_roster, parse_roster, GameSettings, Puzzle, ToneSynthesizer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::services::cues::CueLibrary;
use crate::services::pictures::PictureStore;
use crate::store::GameStore;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub games: Arc<GameStore>,
    pub roster: Arc<Vec<Puzzle>>,
    pub settings: Arc<GameSettings>,
    pub synth: Arc<ToneSynthesizer>,
    pub cues: Arc<CueLibrary>,
    pub pictures: Arc<PictureStore>,
}

impl AppState {
    /// Build state from configuration, reading the roster file if one is set.
    pub fn from_config(config: &ServerConfig) -> error::Result<Self> {
        let roster = match &config.roster_file {
            Some(path) => {
                let content = std::fs::read_to_string(path).map_err(|e| {
                    ApiError::Config(format!("cannot read roster {}: {}", path.display(), e))
                })?;
                parse_roster(&content)?
            }
            None => default_roster(),
        };
        Self::new(config, roster)
    }

    pub fn new(config: &ServerConfig, roster: Vec<Puzzle>) -> error::Result<Self> {
        let settings = config.settings.clone();
        let cues = CueLibrary::render(settings.sample_rate)?;
        let pictures = PictureStore::new(&config.pictures_dir, settings.images_dir.clone());

        Ok(Self {
            games: Arc::new(GameStore::with_limits(config.max_games, config.game_ttl)),
            roster: Arc::new(roster),
            // No output device on a server; the page plays the cues.
            synth: Arc::new(ToneSynthesizer::silent()),
            cues: Arc::new(cues),
            pictures: Arc::new(pictures),
            settings: Arc::new(settings),
        })
    }
}

/// Build the application router
pub fn build_router(state: AppState) -> Router {
    let pictures_route = format!("/{}/{{file}}", state.settings.images_dir);

    Router::new()
        .route("/", get(routes::assets::index))
        .route("/health", get(health_check))
        .route("/api/games", post(routes::games::create))
        .route(
            "/api/games/{game_id}",
            get(routes::games::get).delete(routes::games::delete),
        )
        .route(
            "/api/games/{game_id}/cards/{card_id}/guess",
            post(routes::games::guess),
        )
        .route("/api/cues/{cue}", get(routes::assets::cue))
        .route(&pictures_route, get(routes::assets::picture))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    tracing::info!("Loading roster...");
    let state = AppState::from_config(&config)?;
    tracing::info!(
        names = state.roster.len(),
        pictures = %config.pictures_dir.display(),
        "Roster loaded"
    );

    let _sweeper = state.games.spawn_sweeper(config.sweep_interval());
    tracing::info!(
        max_games = config.max_games,
        ttl_secs = config.game_ttl.as_secs(),
        "Game store ready"
    );

    let app = build_router(state);
    let addr = config.addr();

    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health_check() -> &'static str {
    "OK"
}
