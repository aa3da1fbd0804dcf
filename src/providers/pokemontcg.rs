//! Pokémon TCG API client.

use reqwest::blocking::Client;

use super::PokemonSource;
use crate::config;
use crate::error::Result;
use crate::models::{PokemonCard, PokemonResponse};

const API_KEY_HEADER: &str = "X-Api-Key";

pub struct PokemonTcgClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl PokemonTcgClient {
    pub fn new(client: Client, api_key: Option<String>) -> Self {
        Self {
            client,
            api_key,
            base_url: config::POKEMON_TCG_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn query(&self, q: &str) -> Result<Vec<PokemonCard>> {
        let mut req = self.client.get(&self.base_url).query(&[("q", q)]);
        if let Some(key) = &self.api_key {
            req = req.header(API_KEY_HEADER, key);
        }
        let body: PokemonResponse = req.send()?.error_for_status()?.json()?;
        Ok(body.data)
    }
}

impl PokemonSource for PokemonTcgClient {
    fn find_by_exact_name(&self, name: &str) -> Result<Vec<PokemonCard>> {
        self.query(&exact_name_filter(name))
    }

    fn search(&self, text: &str) -> Result<Vec<PokemonCard>> {
        self.query(text)
    }
}

/// `name:"<name>"` with embedded quotes removed.
pub(crate) fn exact_name_filter(name: &str) -> String {
    format!("name:\"{}\"", name.replace('"', ""))
}
