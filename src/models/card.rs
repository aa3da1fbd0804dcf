use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// CardRecord — canonical resolved card
// ---------------------------------------------------------------------------

/// A parsed entry after successful resolution against a card database.
///
/// Serialized field names follow the deck API's wire format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub card_type: String,
    #[serde(rename = "desc")]
    pub description: String,
    /// Yu-Gi-Oh! attribute, or Pokémon supertype.
    pub attribute: Option<String>,
    #[serde(rename = "atk")]
    pub attack: Option<i64>,
    #[serde(rename = "def")]
    pub defense: Option<i64>,
    #[serde(rename = "image")]
    pub image_url: String,
    pub count: u32,
}

/// Display grouping for a resolved card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSection {
    Monster,
    Spell,
    Trap,
    Pokemon,
    Trainer,
    Energy,
    Other,
}

impl CardRecord {
    /// Map the first YGOPRODeck candidate into a record.
    ///
    /// `atk`/`def` pass through untouched; spells, traps and link monsters
    /// keep `None` rather than a zero.
    pub fn from_yugioh(card: YgoCard, count: u32) -> Self {
        let image_url = card
            .card_images
            .into_iter()
            .next()
            .map(|img| img.image_url)
            .unwrap_or_default();
        Self {
            name: card.name,
            card_type: card.type_field,
            description: card.desc,
            attribute: card.attribute,
            attack: card.atk,
            defense: card.def,
            image_url,
            count,
        }
    }

    /// Map the first Pokémon TCG candidate into a record.
    pub fn from_pokemon(card: PokemonCard, count: u32) -> Self {
        let description = card.rules.into_iter().next().unwrap_or_default();
        let image_url = card
            .images
            .map(|img| img.large.or(img.small).unwrap_or_default())
            .unwrap_or_default();
        Self {
            name: card.name,
            card_type: card.subtypes.join(", "),
            description,
            attribute: card.supertype,
            attack: None,
            defense: None,
            image_url,
            count,
        }
    }

    /// Which display section this card belongs to.
    pub fn section(&self) -> CardSection {
        match self.attribute.as_deref() {
            Some("Pokémon" | "Pokemon") => return CardSection::Pokemon,
            Some("Trainer") => return CardSection::Trainer,
            Some("Energy") => return CardSection::Energy,
            _ => {}
        }
        let ty = self.card_type.to_lowercase();
        if ty.contains("monster") {
            CardSection::Monster
        } else if ty.contains("spell") {
            CardSection::Spell
        } else if ty.contains("trap") {
            CardSection::Trap
        } else {
            CardSection::Other
        }
    }
}

// ---------------------------------------------------------------------------
// YGOPRODeck payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YgoCard {
    pub name: String,
    #[serde(rename = "type", default)]
    pub type_field: String,
    #[serde(default)]
    pub desc: String,
    pub attribute: Option<String>,
    pub atk: Option<i64>,
    pub def: Option<i64>,
    #[serde(default)]
    pub card_images: Vec<YgoCardImage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YgoCardImage {
    pub image_url: String,
    pub image_url_small: Option<String>,
}

/// `{"data": [...]}` envelope returned by `cardinfo.php`.
#[derive(Debug, Clone, Deserialize)]
pub struct YgoResponse {
    #[serde(default)]
    pub data: Vec<YgoCard>,
}

// ---------------------------------------------------------------------------
// Pokémon TCG payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonCard {
    pub name: String,
    pub supertype: Option<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    #[serde(default)]
    pub rules: Vec<String>,
    pub images: Option<PokemonImages>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonImages {
    pub small: Option<String>,
    pub large: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    #[serde(default)]
    pub data: Vec<PokemonCard>,
}
