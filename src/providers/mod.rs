//! External services the pipeline talks to.
//!
//! Each service sits behind a small trait so the pipeline can run against
//! in-memory fakes. The HTTP implementations use a blocking `reqwest`
//! client built with an explicit timeout.

pub mod gemini;
pub mod pokemontcg;
pub mod ygoprodeck;

pub use gemini::GeminiClient;
pub use pokemontcg::PokemonTcgClient;
pub use ygoprodeck::YgoProDeckClient;

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Result;
use crate::models::{PokemonCard, YgoCard};

/// Produces free text for a prompt.
pub trait TextGenerator: Send + Sync {
    fn generate(&self, prompt: &str) -> Result<String>;
}

/// Yu-Gi-Oh! card database.
pub trait YugiohSource: Send + Sync {
    /// Cards whose name matches `name` exactly. No match is `Ok(vec![])`.
    fn find_by_name(&self, name: &str) -> Result<Vec<YgoCard>>;
}

/// Pokémon TCG card database.
pub trait PokemonSource: Send + Sync {
    /// Cards matched by an exact-name filter.
    fn find_by_exact_name(&self, name: &str) -> Result<Vec<PokemonCard>>;

    /// Cards matched by an unfiltered free-text query.
    fn search(&self, text: &str) -> Result<Vec<PokemonCard>>;
}

pub(crate) const USER_AGENT: &str = concat!("deckgen-sdk/", env!("CARGO_PKG_VERSION"));

/// Shared client construction for every provider.
pub fn http_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()?;
    Ok(client)
}
