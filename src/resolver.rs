//! Per-entry card resolution against the game's card database.
//!
//! A lookup failure never escapes this module: each entry ends up either
//! [`Resolution::Resolved`] or [`Resolution::Skipped`], and one entry's
//! outcome has no effect on the next.

use std::fmt;

use crate::models::{CardRecord, Game, ParsedEntry, SkippedEntry};
use crate::providers::{PokemonSource, YugiohSource};

/// Why an entry produced no card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The database answered but listed no candidate.
    NoMatch,
    /// The lookup itself failed (network, status, timeout, payload shape).
    Failed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NoMatch => f.write_str("no matching card"),
            SkipReason::Failed(msg) => write!(f, "lookup failed: {msg}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Resolved { entry: ParsedEntry, card: CardRecord },
    Skipped { entry: ParsedEntry, reason: SkipReason },
}

impl Resolution {
    pub fn entry(&self) -> &ParsedEntry {
        match self {
            Resolution::Resolved { entry, .. } | Resolution::Skipped { entry, .. } => entry,
        }
    }

    pub fn card(&self) -> Option<&CardRecord> {
        match self {
            Resolution::Resolved { card, .. } => Some(card),
            Resolution::Skipped { .. } => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Resolution::Resolved { .. })
    }

    /// The skipped entry in reportable form, if this entry was skipped.
    pub fn to_skipped(&self) -> Option<SkippedEntry> {
        match self {
            Resolution::Skipped { entry, reason } => Some(SkippedEntry {
                name: entry.name.clone(),
                count: entry.count,
                reason: reason.to_string(),
            }),
            Resolution::Resolved { .. } => None,
        }
    }
}

// ---------------------------------------------------------------------------
// CardResolver
// ---------------------------------------------------------------------------

/// Resolves parsed entries through borrowed card sources.
pub struct CardResolver<'a> {
    yugioh: &'a dyn YugiohSource,
    pokemon: &'a dyn PokemonSource,
}

impl<'a> CardResolver<'a> {
    pub fn new(yugioh: &'a dyn YugiohSource, pokemon: &'a dyn PokemonSource) -> Self {
        Self { yugioh, pokemon }
    }

    /// Resolve every entry in order. The output has one item per input.
    pub fn resolve_all(&self, entries: &[ParsedEntry], game: Game) -> Vec<Resolution> {
        entries.iter().map(|e| self.resolve(e, game)).collect()
    }

    /// Resolve a single entry.
    pub fn resolve(&self, entry: &ParsedEntry, game: Game) -> Resolution {
        let outcome = match game {
            Game::Yugioh => self.resolve_yugioh(entry),
            Game::Pokemon => self.resolve_pokemon(entry),
        };

        match outcome {
            Ok(card) => Resolution::Resolved {
                entry: entry.clone(),
                card,
            },
            Err(reason) => {
                eprintln!("Skipping '{}' ({}): {}", entry.name, game, reason);
                Resolution::Skipped {
                    entry: entry.clone(),
                    reason,
                }
            }
        }
    }

    // -- Yu-Gi-Oh! ---------------------------------------------------------

    fn resolve_yugioh(&self, entry: &ParsedEntry) -> Result<CardRecord, SkipReason> {
        eprintln!("Looking up '{}' (yugioh)", entry.name);
        let candidates = self
            .yugioh
            .find_by_name(&entry.name)
            .map_err(|e| SkipReason::Failed(e.to_string()))?;

        candidates
            .into_iter()
            .next()
            .map(|card| CardRecord::from_yugioh(card, entry.count))
            .ok_or(SkipReason::NoMatch)
    }

    // -- Pokémon -----------------------------------------------------------

    /// Exact-name filter on the cleaned name first, then one free-text
    /// retry with the same cleaned name.
    fn resolve_pokemon(&self, entry: &ParsedEntry) -> Result<CardRecord, SkipReason> {
        let cleaned = strip_parenthetical(&entry.name);
        eprintln!("Looking up '{}' (pokemon)", cleaned);

        match self.pokemon.find_by_exact_name(&cleaned) {
            Ok(cards) => match cards.into_iter().next() {
                Some(card) => return Ok(CardRecord::from_pokemon(card, entry.count)),
                None => eprintln!("No exact match for '{}'; retrying as free text", cleaned),
            },
            Err(e) => eprintln!(
                "Exact lookup for '{}' failed ({}); retrying as free text",
                cleaned, e
            ),
        }

        self.pokemon
            .search(&cleaned)
            .map_err(|e| SkipReason::Failed(e.to_string()))?
            .into_iter()
            .next()
            .map(|card| CardRecord::from_pokemon(card, entry.count))
            .ok_or(SkipReason::NoMatch)
    }
}

/// Remove every `( ... )` group, e.g. set or edition notes, and tidy the
/// spacing left behind. A name that is nothing but a parenthetical is
/// returned trimmed but otherwise unchanged.
pub fn strip_parenthetical(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    let mut depth = 0usize;
    for c in name.chars() {
        match c {
            '(' => depth += 1,
            ')' if depth > 0 => depth -= 1,
            _ if depth == 0 => out.push(c),
            _ => {}
        }
    }
    let cleaned = out.split_whitespace().collect::<Vec<_>>().join(" ");
    if cleaned.is_empty() {
        name.trim().to_string()
    } else {
        cleaned
    }
}
