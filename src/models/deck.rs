use std::fmt;

use serde::{Deserialize, Serialize};

use super::card::CardRecord;
use crate::config;

// ---------------------------------------------------------------------------
// Game
// ---------------------------------------------------------------------------

/// The card game a deck is built for. Selects the deck size in the prompt
/// and the card database used for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    #[default]
    Yugioh,
    Pokemon,
}

impl Game {
    /// Interpret a loosely-typed game parameter.
    ///
    /// Matching is case-insensitive. Anything that is not a recognised
    /// Pokémon token, including an absent value, selects Yu-Gi-Oh!.
    pub fn from_param(param: Option<&str>) -> Self {
        match param.map(|p| p.trim().to_lowercase()).as_deref() {
            Some("pokemon" | "pokémon" | "ptcg") => Game::Pokemon,
            _ => Game::Yugioh,
        }
    }

    /// Exact number of cards a main deck holds.
    pub fn deck_size(self) -> u32 {
        match self {
            Game::Yugioh => config::YUGIOH_DECK_SIZE,
            Game::Pokemon => config::POKEMON_DECK_SIZE,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Game::Yugioh => "Yu-Gi-Oh!",
            Game::Pokemon => "Pokémon TCG",
        }
    }

    pub fn all() -> [Game; 2] {
        [Game::Yugioh, Game::Pokemon]
    }
}

impl fmt::Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Game::Yugioh => f.write_str("yugioh"),
            Game::Pokemon => f.write_str("pokemon"),
        }
    }
}

// ---------------------------------------------------------------------------
// DeckRequest
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckRequest {
    pub criteria: String,
    #[serde(default)]
    pub game: Game,
}

impl DeckRequest {
    pub fn new(criteria: impl Into<String>, game: Game) -> Self {
        Self {
            criteria: criteria.into(),
            game,
        }
    }
}

// ---------------------------------------------------------------------------
// ParsedEntry
// ---------------------------------------------------------------------------

/// A `(name, count)` pair read from one main-deck line, before resolution.
///
/// `name` is never empty and `count` is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedEntry {
    pub name: String,
    pub count: u32,
}

impl ParsedEntry {
    pub fn new(name: impl Into<String>, count: u32) -> Self {
        Self {
            name: name.into(),
            count,
        }
    }

    /// The `Name xCount` decklist line for this entry.
    pub fn decklist_line(&self) -> String {
        format!("{} x{}", self.name, self.count)
    }
}

/// Sum card counts, saturating at `u32::MAX`. Counts come straight from
/// model output, so any size is possible.
pub fn total_cards<I>(counts: I) -> u32
where
    I: IntoIterator<Item = u32>,
{
    counts.into_iter().fold(0u32, |acc, n| acc.saturating_add(n))
}

// ---------------------------------------------------------------------------
// SkippedEntry
// ---------------------------------------------------------------------------

/// An entry that produced no card record, with the reason it was dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedEntry {
    pub name: String,
    pub count: u32,
    pub reason: String,
}

// ---------------------------------------------------------------------------
// DeckResult
// ---------------------------------------------------------------------------

/// The final output of one deck-generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeckResult {
    pub theme: String,
    /// Resolved cards in the order they were listed by the model.
    pub cards: Vec<CardRecord>,
    /// One `Name xCount` line per resolved card, same order as `cards`.
    pub decklist: String,
    #[serde(default)]
    pub skipped: Vec<SkippedEntry>,
}

impl DeckResult {
    /// Sum of the `count` of every resolved card.
    pub fn total_count(&self) -> u32 {
        total_cards(self.cards.iter().map(|c| c.count))
    }

    /// The theme with markdown emphasis markers removed.
    pub fn plain_theme(&self) -> String {
        self.theme.replace("**", "").replace("__", "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn game_param_defaults_to_yugioh() {
        assert_eq!(Game::from_param(None), Game::Yugioh);
        assert_eq!(Game::from_param(Some("")), Game::Yugioh);
        assert_eq!(Game::from_param(Some("magic")), Game::Yugioh);
        assert_eq!(Game::from_param(Some("YuGiOh")), Game::Yugioh);
    }

    #[test]
    fn game_param_matches_pokemon_case_insensitively() {
        assert_eq!(Game::from_param(Some("pokemon")), Game::Pokemon);
        assert_eq!(Game::from_param(Some(" POKEMON ")), Game::Pokemon);
        assert_eq!(Game::from_param(Some("Pokémon")), Game::Pokemon);
    }

    #[test]
    fn deck_sizes() {
        assert_eq!(Game::Yugioh.deck_size(), 40);
        assert_eq!(Game::Pokemon.deck_size(), 60);
    }

    #[test]
    fn game_serializes_lowercase() {
        assert_eq!(serde_json::to_value(Game::Pokemon).unwrap(), "pokemon");
        let req: DeckRequest = serde_json::from_str(r#"{"criteria":"burn"}"#).unwrap();
        assert_eq!(req.game, Game::Yugioh);
    }

    #[test]
    fn total_cards_saturates() {
        assert_eq!(total_cards([3, 3, 1]), 7);
        assert_eq!(total_cards([4_000_000_000, 4_000_000_000]), u32::MAX);
        assert_eq!(total_cards(std::iter::empty()), 0);
    }

    #[test]
    fn plain_theme_strips_emphasis() {
        let result = DeckResult {
            theme: "**Blue-Eyes** beatdown with __big__ monsters".into(),
            cards: Vec::new(),
            decklist: String::new(),
            skipped: Vec::new(),
        };
        assert_eq!(result.plain_theme(), "Blue-Eyes beatdown with big monsters");
    }
}
