use deckgen_sdk::AsyncDeckGenerator;

/// Shared application state available to all route handlers via Axum's
/// `State` extractor.
pub struct AppState {
    /// Deck pipeline with its generation model already resolved. Runs the
    /// blocking providers on Tokio's blocking pool.
    pub generator: AsyncDeckGenerator,
}
