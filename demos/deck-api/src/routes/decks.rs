use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::response::Json;
use serde::Deserialize;

use deckgen_sdk::{DeckRequest, DeckResult, Game};

use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GenerateDeckBody {
    pub criteria: Option<String>,
    pub game: Option<String>,
}

/// POST /generate-deck
///
/// Body: `{ "criteria": "dragon deck with traps", "game": "yugioh" }`.
/// `game` is optional; anything other than a Pokémon token means Yu-Gi-Oh!.
/// Responds with `{ theme, cards, decklist, skipped }`.
pub async fn generate_deck(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<GenerateDeckBody>, JsonRejection>,
) -> Result<Json<DeckResult>, AppError> {
    let Json(body) = payload
        .map_err(|rejection| AppError::bad_request("Invalid request", rejection.body_text()))?;
    let criteria = body
        .criteria
        .filter(|c| !c.trim().is_empty())
        .ok_or_else(|| {
            AppError::bad_request("Invalid request", "Missing required field: criteria")
        })?;
    let game = Game::from_param(body.game.as_deref());

    eprintln!("Generating {game} deck for \"{criteria}\"");
    let deck = state
        .generator
        .generate(DeckRequest::new(criteria, game))
        .await
        .map_err(|e| {
            eprintln!("Deck generation failed: {e}");
            AppError::from(e)
        })?;

    Ok(Json(deck))
}
