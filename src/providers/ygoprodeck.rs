//! YGOPRODeck card database client.

use reqwest::blocking::Client;
use reqwest::StatusCode;

use super::YugiohSource;
use crate::config;
use crate::error::Result;
use crate::models::{YgoCard, YgoResponse};

pub struct YgoProDeckClient {
    client: Client,
    base_url: String,
}

impl YgoProDeckClient {
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: config::YGOPRODECK_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl YugiohSource for YgoProDeckClient {
    fn find_by_name(&self, name: &str) -> Result<Vec<YgoCard>> {
        let resp = self
            .client
            .get(&self.base_url)
            .query(&[("name", name)])
            .send()?;

        // The API answers an unknown name with 400 and an error message.
        if resp.status() == StatusCode::BAD_REQUEST {
            return Ok(Vec::new());
        }

        let body: YgoResponse = resp.error_for_status()?.json()?;
        Ok(body.data)
    }
}
