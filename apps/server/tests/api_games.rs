//! Game API tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::Value;

use common::fixtures;
use common::TestContext;
use namecard_server::config::ServerConfig;

/// Health check answers.
#[tokio::test]
async fn test_health() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    response.assert_text("OK");
}

/// A new game lists every card unsolved, names hidden.
#[tokio::test]
async fn test_create_game() {
    let ctx = TestContext::new();
    let server = ctx.server();

    let game = fixtures::create_game(&server).await;
    let cards = game["cards"].as_array().unwrap();

    assert_eq!(cards.len(), 12);
    assert_eq!(game["shake_ms"], 300);
    assert_eq!(game["complete"], false);
    assert_eq!(cards[0]["id"], 0);
    assert_eq!(cards[0]["image_path"], "pictures/Cesar.jpeg");
    assert_eq!(cards[0]["status"], "unsolved");
    assert!(cards.iter().all(|c| c.get("name").is_none()));
    assert_eq!(ctx.state.games.len(), 1);
}

/// Typing part of the name solves the card and locks it.
#[tokio::test]
async fn test_gustave_scenario() {
    let ctx = TestContext::with_names(&["Cesar", "Gustave"]);
    let server = ctx.server();
    let game = fixtures::create_game(&server).await;
    let id = fixtures::game_id(&game);

    let response = server
        .post(&fixtures::guess_url(&id, 1))
        .json(&fixtures::guess_body("stav"))
        .await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["card_id"], 1);
    assert_eq!(body["matched"], true);
    assert_eq!(body["status"], "solved");
    assert_eq!(body["feedback"], "correct");
    assert_eq!(body["message"], "Correct!");
    assert_eq!(body["cue"], "success");
    assert_eq!(body["name"], "Gustave");

    let again: Value = server
        .post(&fixtures::guess_url(&id, 1))
        .json(&fixtures::guess_body("Gustave"))
        .await
        .json();
    assert_eq!(again["matched"], false);
    assert_eq!(again["status"], "solved");
    assert!(again["feedback"].is_null());
    assert!(again["cue"].is_null());
    assert!(again["name"].is_null());

    let state: Value = server.get(&format!("/api/games/{}", id)).await.json();
    assert_eq!(state["cards"][1]["name"], "Gustave");
    assert_eq!(state["cards"][1]["status"], "solved");
    assert!(state["cards"][0].get("name").is_none());
}

/// Wrong and too-short guesses ask to try again.
#[tokio::test]
async fn test_rejected_guesses() {
    let ctx = TestContext::with_names(&["Charly"]);
    let server = ctx.server();
    let id = fixtures::game_id(&fixtures::create_game(&server).await);

    for text in ["xyz", "ar", "", "   "] {
        let body: Value = server
            .post(&fixtures::guess_url(&id, 0))
            .json(&fixtures::guess_body(text))
            .await
            .json();
        assert_eq!(body["matched"], false, "guess {:?}", text);
        assert_eq!(body["status"], "unsolved");
        assert_eq!(body["feedback"], "try_again");
        assert_eq!(body["message"], "Nope, try again.");
        assert_eq!(body["cue"], "fail");
        assert!(body["name"].is_null());
    }

    let body: Value = server
        .post(&fixtures::guess_url(&id, 0))
        .json(&fixtures::guess_body("  ARL "))
        .await
        .json();
    assert_eq!(body["matched"], true);
}

/// Solving every card completes the game.
#[tokio::test]
async fn test_complete_game() {
    let ctx = TestContext::with_names(&["June", "Elliot"]);
    let server = ctx.server();
    let id = fixtures::game_id(&fixtures::create_game(&server).await);

    server
        .post(&fixtures::guess_url(&id, 0))
        .json(&fixtures::guess_body("june"))
        .await
        .assert_status_ok();
    let state: Value = server.get(&format!("/api/games/{}", id)).await.json();
    assert_eq!(state["complete"], false);

    server
        .post(&fixtures::guess_url(&id, 1))
        .json(&fixtures::guess_body("lio"))
        .await
        .assert_status_ok();
    let state: Value = server.get(&format!("/api/games/{}", id)).await.json();
    assert_eq!(state["complete"], true);
}

/// Two games do not share progress.
#[tokio::test]
async fn test_games_are_independent() {
    let ctx = TestContext::with_names(&["Albane"]);
    let server = ctx.server();
    let first = fixtures::game_id(&fixtures::create_game(&server).await);
    let second = fixtures::game_id(&fixtures::create_game(&server).await);

    server
        .post(&fixtures::guess_url(&first, 0))
        .json(&fixtures::guess_body("ban"))
        .await
        .assert_status_ok();

    let other: Value = server.get(&format!("/api/games/{}", second)).await.json();
    assert_eq!(other["cards"][0]["status"], "unsolved");
}

/// Unknown cards and games are 404s.
#[tokio::test]
async fn test_unknown_card_and_game() {
    let ctx = TestContext::with_names(&["Isaure"]);
    let server = ctx.server();
    let id = fixtures::game_id(&fixtures::create_game(&server).await);

    let response = server
        .post(&fixtures::guess_url(&id, 5))
        .json(&fixtures::guess_body("isa"))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "not_found");

    let missing = "00000000-0000-4000-8000-000000000000";
    server
        .get(&format!("/api/games/{}", missing))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .post(&fixtures::guess_url(missing, 0))
        .json(&fixtures::guess_body("isa"))
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

/// Deleting a game forgets it.
#[tokio::test]
async fn test_delete_game() {
    let ctx = TestContext::with_names(&["Matteo"]);
    let server = ctx.server();
    let id = fixtures::game_id(&fixtures::create_game(&server).await);

    server
        .delete(&format!("/api/games/{}", id))
        .await
        .assert_status(StatusCode::NO_CONTENT);
    server
        .get(&format!("/api/games/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .delete(&format!("/api/games/{}", id))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    assert!(ctx.state.games.is_empty());
}

/// Abandoned games do not pile up past the configured limit.
#[tokio::test]
async fn test_store_stays_bounded_without_deletes() {
    let config = ServerConfig {
        max_games: 20,
        ..ServerConfig::default()
    };
    let ctx = TestContext::with_config(&["Alexandra"], config);
    let server = ctx.server();

    let mut ids = Vec::new();
    for _ in 0..100 {
        ids.push(fixtures::game_id(&fixtures::create_game(&server).await));
    }

    assert_eq!(ctx.state.games.len(), 20);
    server
        .get(&format!("/api/games/{}", ids[0]))
        .await
        .assert_status(StatusCode::NOT_FOUND);
    server
        .get(&format!("/api/games/{}", ids[99]))
        .await
        .assert_status_ok();
}
