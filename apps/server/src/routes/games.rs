//! Game endpoints

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use namecard_core::Game;
use uuid::Uuid;

use crate::error::{ApiError, Result};
use crate::models::*;
use crate::AppState;

/// POST /api/games
pub async fn create(State(state): State<AppState>) -> Result<(StatusCode, Json<GameResponse>)> {
    let game = Game::new(
        state.roster.as_ref().clone(),
        Arc::clone(&state.synth),
        state.settings.as_ref().clone(),
    )?;

    let game_id = Uuid::new_v4();
    let response = GameResponse::new(game_id, &game);
    state.games.insert(game_id, game);

    tracing::info!(%game_id, cards = response.cards.len(), "game created");
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/games/{game_id}
pub async fn get(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<Json<GameResponse>> {
    let response = state
        .games
        .with_game(&game_id, |game| Ok(GameResponse::new(game_id, game)))?;
    Ok(Json(response))
}

/// POST /api/games/{game_id}/cards/{card_id}/guess
pub async fn guess(
    State(state): State<AppState>,
    Path((game_id, card_id)): Path<(Uuid, usize)>,
    Json(request): Json<GuessRequest>,
) -> Result<Json<GuessResponse>> {
    let (outcome, name, complete) = state.games.with_game(&game_id, |game| {
        let outcome = game.submit_guess(card_id, &request.text)?;
        let name = if outcome.matched {
            game.card(card_id)?.name
        } else {
            None
        };
        Ok((outcome, name, game.is_complete()))
    })?;

    if outcome.matched && complete {
        tracing::info!(%game_id, "game complete");
    }
    Ok(Json(GuessResponse::from(outcome).with_name(name)))
}

/// DELETE /api/games/{game_id}
pub async fn delete(
    State(state): State<AppState>,
    Path(game_id): Path<Uuid>,
) -> Result<StatusCode> {
    if !state.games.remove(&game_id) {
        return Err(ApiError::NotFound(format!("game {}", game_id)));
    }
    tracing::info!(%game_id, "game deleted");
    Ok(StatusCode::NO_CONTENT)
}
