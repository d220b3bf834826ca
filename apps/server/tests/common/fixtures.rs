//! Request helpers shared by the API tests.

use axum_test::TestServer;
use serde_json::{json, Value};

/// Create a game and return its JSON body.
pub async fn create_game(server: &TestServer) -> Value {
    let response = server.post("/api/games").await;
    response.assert_status(axum::http::StatusCode::CREATED);
    response.json()
}

/// Game id from a create/fetch response.
pub fn game_id(game: &Value) -> String {
    game["game_id"].as_str().expect("game_id").to_string()
}

/// Guess URL for one card.
pub fn guess_url(game_id: &str, card_id: usize) -> String {
    format!("/api/games/{}/cards/{}/guess", game_id, card_id)
}

/// Guess request body.
pub fn guess_body(text: &str) -> Value {
    json!({ "text": text })
}
