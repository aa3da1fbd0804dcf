//! Async wrapper around [`DeckGenerator`] for use in async runtimes (Tokio, etc.).
//!
//! The HTTP providers are blocking, so every pipeline run and the build
//! itself (which may probe for a model) are moved onto Tokio's blocking
//! pool via [`tokio::task::spawn_blocking`].
//!
//! # Example
//!
//! ```no_run
//! use deckgen_sdk::{AsyncDeckGenerator, DeckRequest, Game};
//!
//! #[tokio::main]
//! async fn main() {
//!     let generator = AsyncDeckGenerator::builder(
//!         deckgen_sdk::DeckGenerator::builder().gemini_api_key("..."),
//!     )
//!     .build()
//!     .await
//!     .unwrap();
//!
//!     let deck = generator
//!         .generate(DeckRequest::new("lightning aggro", Game::Pokemon))
//!         .await
//!         .unwrap();
//!     println!("{}", deck.decklist);
//! }
//! ```

use std::sync::Arc;

use crate::error::{DeckgenError, Result};
use crate::models::{DeckRequest, DeckResult};
use crate::{DeckGenerator, DeckGeneratorBuilder};

// ---------------------------------------------------------------------------
// AsyncDeckGeneratorBuilder
// ---------------------------------------------------------------------------

/// Builds an [`AsyncDeckGenerator`] from a configured [`DeckGeneratorBuilder`].
pub struct AsyncDeckGeneratorBuilder {
    inner: DeckGeneratorBuilder,
}

impl AsyncDeckGeneratorBuilder {
    /// Build on the blocking thread pool.
    pub async fn build(self) -> Result<AsyncDeckGenerator> {
        let inner = self.inner;
        let generator = tokio::task::spawn_blocking(move || inner.build())
            .await
            .map_err(|e| DeckgenError::Task(format!("Task join error: {e}")))??;
        Ok(AsyncDeckGenerator::new(generator))
    }
}

// ---------------------------------------------------------------------------
// AsyncDeckGenerator
// ---------------------------------------------------------------------------

/// Shareable async handle to a [`DeckGenerator`].
///
/// Cloning is cheap; clones share the same generator.
#[derive(Clone)]
pub struct AsyncDeckGenerator {
    inner: Arc<DeckGenerator>,
}

impl AsyncDeckGenerator {
    pub fn builder(inner: DeckGeneratorBuilder) -> AsyncDeckGeneratorBuilder {
        AsyncDeckGeneratorBuilder { inner }
    }

    /// Wrap an already-built generator.
    pub fn new(generator: DeckGenerator) -> Self {
        Self {
            inner: Arc::new(generator),
        }
    }

    pub fn model(&self) -> &str {
        self.inner.model()
    }

    /// Run a sync generator operation on the blocking thread pool.
    pub async fn run<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DeckGenerator) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let generator = self.inner.clone();
        tokio::task::spawn_blocking(move || f(&generator))
            .await
            .map_err(|e| DeckgenError::Task(format!("Task join error: {e}")))?
    }

    /// Generate and resolve one deck.
    pub async fn generate(&self, request: DeckRequest) -> Result<DeckResult> {
        self.run(move |g| g.generate(&request)).await
    }
}
