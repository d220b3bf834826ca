//! Server configuration from environment variables.

use std::path::PathBuf;
use std::time::Duration;

use namecard_core::GameSettings;

use crate::error::{ApiError, Result};
use crate::store::{DEFAULT_IDLE_TTL, DEFAULT_MAX_GAMES};

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Filesystem directory the card images are served from.
    pub pictures_dir: PathBuf,
    /// Optional roster file; the built-in names are used otherwise.
    pub roster_file: Option<PathBuf>,
    pub settings: GameSettings,
    /// Games kept in memory at once.
    pub max_games: usize,
    /// Idle time after which a game is forgotten.
    pub game_ttl: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            pictures_dir: PathBuf::from("pictures"),
            roster_file: None,
            settings: GameSettings::default(),
            max_games: DEFAULT_MAX_GAMES,
            game_ttl: DEFAULT_IDLE_TTL,
        }
    }
}

impl ServerConfig {
    /// Load from the process environment (after `.env`, if present).
    ///
    /// Recognized variables:
    /// - HOST, PORT: listen address
    /// - PICTURES_DIR: image directory on disk
    /// - IMAGE_EXT: image file extension
    /// - ROSTER_FILE: one name per line
    /// - SHAKE_MS: wrong-answer shake duration
    /// - SAMPLE_RATE: cue rendering rate
    /// - MAX_GAMES: games kept in memory at once
    /// - GAME_TTL_SECS: idle seconds before a game is forgotten
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(host) = lookup("HOST") {
            config.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.port = parse_number("PORT", &port)?;
        }
        if let Some(dir) = lookup("PICTURES_DIR") {
            config.pictures_dir = PathBuf::from(dir);
        }
        if let Some(ext) = lookup("IMAGE_EXT") {
            config.settings.image_ext = ext.trim_start_matches('.').to_string();
        }
        config.roster_file = lookup("ROSTER_FILE").map(PathBuf::from);
        if let Some(shake) = lookup("SHAKE_MS") {
            config.settings.shake_ms = parse_number("SHAKE_MS", &shake)?;
        }
        if let Some(rate) = lookup("SAMPLE_RATE") {
            config.settings.sample_rate = parse_number("SAMPLE_RATE", &rate)?;
            if config.settings.sample_rate == 0 {
                return Err(ApiError::Config("SAMPLE_RATE must be positive".to_string()));
            }
        }

        if let Some(max) = lookup("MAX_GAMES") {
            config.max_games = parse_number("MAX_GAMES", &max)?;
            if config.max_games == 0 {
                return Err(ApiError::Config("MAX_GAMES must be positive".to_string()));
            }
        }
        if let Some(ttl) = lookup("GAME_TTL_SECS") {
            let secs: u64 = parse_number("GAME_TTL_SECS", &ttl)?;
            if secs == 0 {
                return Err(ApiError::Config("GAME_TTL_SECS must be positive".to_string()));
            }
            config.game_ttl = Duration::from_secs(secs);
        }

        Ok(config)
    }

    /// How often idle games are swept.
    pub fn sweep_interval(&self) -> Duration {
        (self.game_ttl / 4).max(Duration::from_secs(1))
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, value: &str) -> Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| ApiError::Config(format!("{} must be a number, got {:?}", key, value)))
}
