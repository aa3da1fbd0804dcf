use std::env;
use std::time::Duration;

use crate::error::{DeckgenError, Result};

pub const GEMINI_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const YGOPRODECK_URL: &str = "https://db.ygoprodeck.com/api/v7/cardinfo.php";
pub const POKEMON_TCG_URL: &str = "https://api.pokemontcg.io/v2/cards";

/// Model used when discovery fails or finds nothing usable.
pub const DEFAULT_MODEL: &str = "models/gemini-pro";

pub const YUGIOH_DECK_SIZE: u32 = 40;
pub const POKEMON_DECK_SIZE: u32 = 60;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

pub const ENV_GEMINI_API_KEY: &str = "GEMINI_API_KEY";
pub const ENV_POKEMON_API_KEY: &str = "POKEMON_TCG_API_KEY";
pub const ENV_MODEL: &str = "DECKGEN_MODEL";
pub const ENV_TIMEOUT_SECS: &str = "DECKGEN_TIMEOUT_SECS";

/// Values a process reads once from its environment before building a
/// [`DeckGenerator`](crate::DeckGenerator).
#[derive(Debug, Clone)]
pub struct Settings {
    pub gemini_api_key: String,
    pub pokemon_api_key: Option<String>,
    /// Explicit model name. `None` means discover one at build time.
    pub model: Option<String>,
    pub timeout: Duration,
}

impl Settings {
    /// Read settings from the process environment.
    ///
    /// `GEMINI_API_KEY` is required; every other variable is optional.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let gemini_api_key = non_empty(ENV_GEMINI_API_KEY)
            .ok_or_else(|| DeckgenError::Config(format!("{ENV_GEMINI_API_KEY} is not set")))?;

        let timeout = match non_empty(ENV_TIMEOUT_SECS) {
            Some(raw) => {
                let secs: u64 = raw.parse().map_err(|_| {
                    DeckgenError::Config(format!(
                        "{ENV_TIMEOUT_SECS} must be a whole number of seconds, got '{raw}'"
                    ))
                })?;
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            gemini_api_key,
            pokemon_api_key: non_empty(ENV_POKEMON_API_KEY),
            model: non_empty(ENV_MODEL),
            timeout,
        })
    }
}
