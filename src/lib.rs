//! Deck generation SDK for Rust.
//!
//! Turns a free-text deck request into a structured, resolved deck: a
//! language model writes a themed card list, the list is parsed into
//! `(name, count)` entries, and each entry is resolved against the game's
//! card database.
//!
//! # Quick start
//!
//! ```no_run
//! use deckgen_sdk::{DeckGenerator, DeckRequest, Game};
//!
//! let generator = DeckGenerator::builder()
//!     .gemini_api_key("...")
//!     .build()
//!     .unwrap();
//!
//! let deck = generator
//!     .generate(&DeckRequest::new("dragon deck with traps", Game::Yugioh))
//!     .unwrap();
//! println!("{}\n\n{}", deck.theme, deck.decklist);
//! ```

pub mod assembler;
#[cfg(feature = "async")]
pub mod async_client;
pub mod config;
pub mod error;
pub mod models;
pub mod parsing;
pub mod prompt;
pub mod providers;
pub mod resolver;

pub use assembler::DeckAssembler;
#[cfg(feature = "async")]
pub use async_client::AsyncDeckGenerator;
pub use config::Settings;
pub use error::{DeckgenError, Result};
pub use models::{CardRecord, CardSection, DeckRequest, DeckResult, Game, ParsedEntry, SkippedEntry};
pub use prompt::PromptBuilder;
pub use providers::{PokemonSource, TextGenerator, YugiohSource};
pub use resolver::{CardResolver, Resolution, SkipReason};

use std::fmt;
use std::time::Duration;

use providers::{GeminiClient, PokemonTcgClient, YgoProDeckClient};

// ---------------------------------------------------------------------------
// DeckGeneratorBuilder
// ---------------------------------------------------------------------------

/// Builder for configuring and constructing a [`DeckGenerator`].
///
/// Every external service can be replaced with a custom implementation;
/// services left unset get their HTTP client.
pub struct DeckGeneratorBuilder {
    gemini_api_key: Option<String>,
    pokemon_api_key: Option<String>,
    model: Option<String>,
    timeout: Duration,
    generator: Option<Box<dyn TextGenerator>>,
    yugioh_source: Option<Box<dyn YugiohSource>>,
    pokemon_source: Option<Box<dyn PokemonSource>>,
}

impl Default for DeckGeneratorBuilder {
    fn default() -> Self {
        Self {
            gemini_api_key: None,
            pokemon_api_key: None,
            model: None,
            timeout: config::DEFAULT_TIMEOUT,
            generator: None,
            yugioh_source: None,
            pokemon_source: None,
        }
    }
}

impl DeckGeneratorBuilder {
    /// Start from values read with [`Settings::from_env`].
    pub fn from_settings(settings: Settings) -> Self {
        let mut builder = Self::default()
            .gemini_api_key(settings.gemini_api_key)
            .timeout(settings.timeout);
        builder.pokemon_api_key = settings.pokemon_api_key;
        builder.model = settings.model;
        builder
    }

    /// API key for the Gemini generation service.
    pub fn gemini_api_key(mut self, key: impl Into<String>) -> Self {
        self.gemini_api_key = Some(key.into());
        self
    }

    /// API key sent to the Pokémon TCG API.
    pub fn pokemon_api_key(mut self, key: impl Into<String>) -> Self {
        self.pokemon_api_key = Some(key.into());
        self
    }

    /// Use this generation model instead of discovering one.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Per-call HTTP timeout for every service. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn generator(mut self, generator: impl TextGenerator + 'static) -> Self {
        self.generator = Some(Box::new(generator));
        self
    }

    pub fn yugioh_source(mut self, source: impl YugiohSource + 'static) -> Self {
        self.yugioh_source = Some(Box::new(source));
        self
    }

    pub fn pokemon_source(mut self, source: impl PokemonSource + 'static) -> Self {
        self.pokemon_source = Some(Box::new(source));
        self
    }

    /// Build the generator.
    ///
    /// Without an explicit model this probes the generation service once
    /// for a usable model and keeps the answer for the generator's
    /// lifetime. Fails only when the default generation service is needed
    /// and no API key was given.
    pub fn build(self) -> Result<DeckGenerator> {
        let timeout = self.timeout;
        let mut shared: Option<reqwest::blocking::Client> = None;
        let mut http = || -> Result<reqwest::blocking::Client> {
            if let Some(client) = &shared {
                return Ok(client.clone());
            }
            let client = providers::http_client(timeout)?;
            shared = Some(client.clone());
            Ok(client)
        };

        let (generator, model): (Box<dyn TextGenerator>, String) = match self.generator {
            Some(generator) => (generator, self.model.unwrap_or_else(|| "custom".to_string())),
            None => {
                let key = self.gemini_api_key.ok_or_else(|| {
                    DeckgenError::Config(format!("{} is required", config::ENV_GEMINI_API_KEY))
                })?;
                let client = http()?;
                let model = match self.model {
                    Some(model) => model,
                    None => GeminiClient::discover_model(&client, &key),
                };
                let gemini = GeminiClient::new(client, key, model);
                let model = gemini.model().to_string();
                (Box::new(gemini), model)
            }
        };

        let yugioh: Box<dyn YugiohSource> = match self.yugioh_source {
            Some(source) => source,
            None => Box::new(YgoProDeckClient::new(http()?)),
        };

        let pokemon: Box<dyn PokemonSource> = match self.pokemon_source {
            Some(source) => source,
            None => {
                if self.pokemon_api_key.is_none() {
                    eprintln!(
                        "{} not set; Pokémon lookups will use the unauthenticated rate limit",
                        config::ENV_POKEMON_API_KEY
                    );
                }
                Box::new(PokemonTcgClient::new(http()?, self.pokemon_api_key))
            }
        };

        Ok(DeckGenerator {
            generator,
            yugioh,
            pokemon,
            model,
        })
    }
}

// ---------------------------------------------------------------------------
// DeckGenerator
// ---------------------------------------------------------------------------

/// Runs the full request pipeline: prompt, generation, segmentation,
/// parsing, resolution and assembly.
///
/// Holds no per-request state, so one instance can serve many requests.
pub struct DeckGenerator {
    generator: Box<dyn TextGenerator>,
    yugioh: Box<dyn YugiohSource>,
    pokemon: Box<dyn PokemonSource>,
    model: String,
}

impl DeckGenerator {
    pub fn builder() -> DeckGeneratorBuilder {
        DeckGeneratorBuilder::default()
    }

    /// The generation model chosen when this generator was built.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Resolver over this generator's card sources.
    pub fn resolver(&self) -> CardResolver<'_> {
        CardResolver::new(self.yugioh.as_ref(), self.pokemon.as_ref())
    }

    /// Generate and resolve one deck.
    ///
    /// Only a failed generation call (or empty criteria) is an error. Cards
    /// that fail to resolve are left out of the result and listed in
    /// [`DeckResult::skipped`].
    pub fn generate(&self, request: &DeckRequest) -> Result<DeckResult> {
        let criteria = request.criteria.trim();
        if criteria.is_empty() {
            return Err(DeckgenError::InvalidArgument("criteria must not be empty".into()));
        }

        let prompt = PromptBuilder::new(request.game).build(criteria);
        let text = self.generator.generate(&prompt)?;

        let segments = parsing::segment(&text);
        if segments.deck_lines.is_empty() {
            eprintln!("Generated text has no main deck section; returning theme only");
        }
        let entries = parsing::parse_deck_lines(segments.deck_lines.iter().map(String::as_str));
        let requested = models::total_cards(entries.iter().map(|e| e.count));
        eprintln!(
            "Parsed {} entries ({} cards, target {}) for {}",
            entries.len(),
            requested,
            request.game.deck_size(),
            request.game
        );

        let resolutions = self.resolver().resolve_all(&entries, request.game);
        let deck = DeckAssembler::assemble(segments.theme, resolutions);
        eprintln!(
            "Resolved {} of {} entries ({} cards)",
            deck.cards.len(),
            entries.len(),
            deck.total_count()
        );
        Ok(deck)
    }
}

impl fmt::Display for DeckGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeckGenerator(model={})", self.model)
    }
}
