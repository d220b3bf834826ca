//! Common test utilities for integration tests.
//!
//! Builds the full router over an in-memory game store and a temporary
//! pictures directory; no external services are needed.

#![allow(dead_code)]

pub mod fixtures;

use axum::Router;
use axum_test::TestServer;
use tempfile::TempDir;

use namecard_core::Puzzle;
use namecard_server::config::ServerConfig;
use namecard_server::{build_router, AppState};

/// Test context holding the router and the pictures directory it serves.
pub struct TestContext {
    pub state: AppState,
    pub pictures: TempDir,
    app: Router,
}

impl TestContext {
    /// Context over the given names.
    pub fn with_names(names: &[&str]) -> Self {
        Self::with_config(names, ServerConfig::default())
    }

    /// Context over the given names with a custom config; the pictures
    /// directory is always a fresh temporary one.
    pub fn with_config(names: &[&str], config: ServerConfig) -> Self {
        let pictures = tempfile::tempdir().expect("Failed to create pictures dir");

        let config = ServerConfig {
            pictures_dir: pictures.path().to_path_buf(),
            ..config
        };
        let roster = names.iter().copied().map(Puzzle::new).collect();
        let state = AppState::new(&config, roster).expect("Failed to build app state");
        let app = build_router(state.clone());

        Self {
            state,
            pictures,
            app,
        }
    }

    /// Context over the built-in roster.
    pub fn new() -> Self {
        Self::with_names(namecard_core::roster::DEFAULT_NAMES)
    }

    /// Get a test server for the router.
    pub fn server(&self) -> TestServer {
        TestServer::new(self.app.clone()).expect("Failed to start test server")
    }

    /// Write a file into the pictures directory.
    pub fn add_picture(&self, file: &str, bytes: &[u8]) {
        std::fs::write(self.pictures.path().join(file), bytes).expect("Failed to write picture");
    }
}
