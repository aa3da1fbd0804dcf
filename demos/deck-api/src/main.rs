mod error;
mod routes;
mod state;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use deckgen_sdk::{AsyncDeckGenerator, DeckGeneratorBuilder, Settings};
use state::AppState;

const DEFAULT_ADDR: &str = "0.0.0.0:5000";

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        eprintln!("No .env file loaded ({e}); using process environment");
    }

    let settings = Settings::from_env().expect("Invalid deck generator configuration");

    eprintln!("Initializing deck generator...");
    let generator = AsyncDeckGenerator::builder(DeckGeneratorBuilder::from_settings(settings))
        .build()
        .await
        .expect("Failed to initialize deck generator");
    eprintln!("Deck generator ready (model {}).", generator.model());

    let state = Arc::new(AppState { generator });

    let app = Router::new()
        .route("/generate-deck", post(routes::decks::generate_deck))
        .route("/api/meta", get(routes::meta::get_meta))
        .layer(CorsLayer::permissive())
        .with_state(state);

    let addr = std::env::var("DECKGEN_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    eprintln!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
