//! Shared fakes for the deckgen-sdk integration tests.
//!
//! Every fake records the queries it receives behind an `Arc<Mutex<_>>` so
//! a test can keep a handle after moving the fake into a builder.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use std::thread;

use deckgen_sdk::models::{PokemonCard, YgoCard};
use deckgen_sdk::{DeckgenError, PokemonSource, Result, TextGenerator, YugiohSource};

pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

// -- Generation ---------------------------------------------------------------

pub struct FakeGenerator {
    reply: std::result::Result<String, String>,
    pub prompts: CallLog,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            prompts: CallLog::default(),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            prompts: CallLog::default(),
        }
    }
}

impl TextGenerator for FakeGenerator {
    fn generate(&self, prompt: &str) -> Result<String> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.reply.clone().map_err(DeckgenError::Generation)
    }
}

// -- Yu-Gi-Oh! ------------------------------------------------------------------

#[derive(Default)]
pub struct FakeYugioh {
    cards: HashMap<String, YgoCard>,
    broken: HashSet<String>,
    pub queries: CallLog,
}

impl FakeYugioh {
    pub fn with_card(mut self, card: YgoCard) -> Self {
        self.cards.insert(card.name.clone(), card);
        self
    }

    /// Lookups for `name` fail with a transport-style error.
    pub fn with_broken(mut self, name: &str) -> Self {
        self.broken.insert(name.to_string());
        self
    }
}

impl YugiohSource for FakeYugioh {
    fn find_by_name(&self, name: &str) -> Result<Vec<YgoCard>> {
        self.queries.lock().unwrap().push(name.to_string());
        if self.broken.contains(name) {
            return Err(DeckgenError::Lookup(format!("connection reset looking up {name}")));
        }
        Ok(self.cards.get(name).cloned().into_iter().collect())
    }
}

// -- Pokémon --------------------------------------------------------------------

#[derive(Default)]
pub struct FakePokemon {
    exact: HashMap<String, PokemonCard>,
    free_text: HashMap<String, PokemonCard>,
    exact_broken: bool,
    search_broken: bool,
    pub queries: CallLog,
}

impl FakePokemon {
    /// Found by the exact-name filter (and by free text).
    pub fn with_card(mut self, card: PokemonCard) -> Self {
        self.exact.insert(card.name.clone(), card.clone());
        self.free_text.insert(card.name.clone(), card);
        self
    }

    /// Found only by the free-text search for `text`.
    pub fn with_search_hit(mut self, text: &str, card: PokemonCard) -> Self {
        self.free_text.insert(text.to_string(), card);
        self
    }

    pub fn with_exact_broken(mut self) -> Self {
        self.exact_broken = true;
        self
    }

    pub fn with_search_broken(mut self) -> Self {
        self.search_broken = true;
        self
    }
}

impl PokemonSource for FakePokemon {
    fn find_by_exact_name(&self, name: &str) -> Result<Vec<PokemonCard>> {
        self.queries.lock().unwrap().push(format!("exact:{name}"));
        if self.exact_broken {
            return Err(DeckgenError::Lookup("503 Service Unavailable".into()));
        }
        Ok(self.exact.get(name).cloned().into_iter().collect())
    }

    fn search(&self, text: &str) -> Result<Vec<PokemonCard>> {
        self.queries.lock().unwrap().push(format!("search:{text}"));
        if self.search_broken {
            return Err(DeckgenError::Lookup("503 Service Unavailable".into()));
        }
        Ok(self.free_text.get(text).cloned().into_iter().collect())
    }
}

// -- Fixtures -------------------------------------------------------------------

pub fn ygo_monster(name: &str, atk: i64, def: i64) -> YgoCard {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "type": "Effect Monster",
        "desc": format!("{name} effect text."),
        "atk": atk,
        "def": def,
        "attribute": "DARK",
        "card_images": [{ "image_url": format!("https://images.example/{name}.jpg") }]
    }))
    .unwrap()
}

pub fn ygo_spell(name: &str) -> YgoCard {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "type": "Spell Card",
        "desc": format!("{name} spell text."),
        "card_images": [{ "image_url": format!("https://images.example/{name}.jpg") }]
    }))
    .unwrap()
}

pub fn pokemon(name: &str, supertype: &str, subtypes: &[&str]) -> PokemonCard {
    serde_json::from_value(serde_json::json!({
        "name": name,
        "supertype": supertype,
        "subtypes": subtypes,
        "images": { "small": format!("https://images.example/{name}.png") }
    }))
    .unwrap()
}

// -- Local HTTP server ----------------------------------------------------------

/// Serve `router` on an ephemeral localhost port from a background thread
/// and return its base URL (`http://127.0.0.1:<port>`).
///
/// The server lives until the test process exits.
pub fn serve(router: axum::Router) -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    listener.set_nonblocking(true).unwrap();
    let addr = listener.local_addr().unwrap();

    thread::spawn(move || {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        runtime.block_on(async move {
            let listener = tokio::net::TcpListener::from_std(listener).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });

    format!("http://{addr}")
}
