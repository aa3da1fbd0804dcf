//! Google Generative Language API client.

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::TextGenerator;
use crate::config;
use crate::error::{DeckgenError, Result};

const API_KEY_HEADER: &str = "x-goog-api-key";
const GENERATE_METHOD: &str = "generateContent";

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeminiModel {
    pub name: String,
    #[serde(default)]
    pub supported_generation_methods: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    models: Vec<GeminiModel>,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<PartIn<'a>>,
}

#[derive(Debug, Serialize)]
struct PartIn<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<PartOut>,
}

#[derive(Debug, Deserialize)]
struct PartOut {
    text: Option<String>,
}

/// Text generation backed by a Gemini model.
///
/// The model is fixed at construction; see [`GeminiClient::discover_model`]
/// for picking one from the provider's catalogue.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(client: Client, api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client,
            api_key: api_key.into(),
            model: qualify_model(&model.into()),
            base_url: config::GEMINI_BASE.to_string(),
        }
    }

    /// Point the client at a different API root.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// List the models visible to `api_key`.
    pub fn list_models(client: &Client, api_key: &str) -> Result<Vec<GeminiModel>> {
        let url = format!("{}/models", config::GEMINI_BASE);
        let list: ModelList = client
            .get(&url)
            .header(API_KEY_HEADER, api_key)
            .query(&[("pageSize", "1000")])
            .send()?
            .error_for_status()?
            .json()?;
        Ok(list.models)
    }

    /// Pick the first model that supports content generation.
    ///
    /// Falls back to [`config::DEFAULT_MODEL`] when the catalogue cannot be
    /// read or lists no such model.
    pub fn discover_model(client: &Client, api_key: &str) -> String {
        match Self::list_models(client, api_key) {
            Ok(models) => match pick_generation_model(&models) {
                Some(name) => {
                    eprintln!("Using generation model {}", name);
                    name
                }
                None => {
                    eprintln!(
                        "No listed model supports {}; falling back to {}",
                        GENERATE_METHOD,
                        config::DEFAULT_MODEL
                    );
                    config::DEFAULT_MODEL.to_string()
                }
            },
            Err(e) => {
                eprintln!(
                    "Could not list generation models ({}); falling back to {}",
                    e,
                    config::DEFAULT_MODEL
                );
                config::DEFAULT_MODEL.to_string()
            }
        }
    }
}

impl TextGenerator for GeminiClient {
    fn generate(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/{}:{}", self.base_url, self.model, GENERATE_METHOD);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![PartIn { text: prompt }],
            }],
        };

        let resp: GenerateResponse = self
            .client
            .post(&url)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        extract_text(resp)
    }
}

pub(crate) fn pick_generation_model(models: &[GeminiModel]) -> Option<String> {
    models
        .iter()
        .find(|m| m.supported_generation_methods.iter().any(|g| g == GENERATE_METHOD))
        .map(|m| m.name.clone())
}

/// Model ids go into the URL path as `models/<id>`.
fn qualify_model(model: &str) -> String {
    if model.starts_with("models/") || model.starts_with("tunedModels/") {
        model.to_string()
    } else {
        format!("models/{model}")
    }
}

fn extract_text(resp: GenerateResponse) -> Result<String> {
    let candidate = resp
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| DeckgenError::Generation("response contained no candidates".into()))?;

    let text: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(DeckgenError::Generation("candidate contained no text".into()));
    }
    Ok(text)
}
