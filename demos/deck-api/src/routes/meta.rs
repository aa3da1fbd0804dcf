use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use serde_json::{json, Value};

use deckgen_sdk::Game;

use crate::state::AppState;

/// GET /api/meta
///
/// Returns the generation model in use and the supported games.
pub async fn get_meta(State(state): State<Arc<AppState>>) -> Json<Value> {
    let games: Vec<Value> = Game::all()
        .into_iter()
        .map(|g| {
            json!({
                "game": g,
                "name": g.display_name(),
                "deckSize": g.deck_size()
            })
        })
        .collect();

    Json(json!({
        "model": state.generator.model(),
        "games": games
    }))
}
