// src/core/types.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The fixed set of card-game categories partitioning the dictionary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Pokemon,
    Ygo,
    Digi,
    Onepiece,
    Mtg,
}

impl CardType {
    pub const ALL: [CardType; 5] = [
        CardType::Pokemon,
        CardType::Ygo,
        CardType::Digi,
        CardType::Onepiece,
        CardType::Mtg,
    ];

    /// Stable identifier, also the JSON key in config files.
    pub fn as_str(&self) -> &'static str {
        match self {
            CardType::Pokemon => "pokemon",
            CardType::Ygo => "ygo",
            CardType::Digi => "digi",
            CardType::Onepiece => "onepiece",
            CardType::Mtg => "mtg",
        }
    }

    /// Path segment Yuyutei uses for this game.
    pub fn site_slug(&self) -> &'static str {
        match self {
            CardType::Pokemon => "poc",
            CardType::Ygo => "ygo",
            CardType::Digi => "digi",
            CardType::Onepiece => "opc",
            CardType::Mtg => "mtg",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CardType::Pokemon => "Pokémon",
            CardType::Ygo => "Yu-Gi-Oh",
            CardType::Digi => "Digimon",
            CardType::Onepiece => "One Piece",
            CardType::Mtg => "Magic",
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pokemon" => Ok(CardType::Pokemon),
            "ygo" => Ok(CardType::Ygo),
            "digi" => Ok(CardType::Digi),
            "onepiece" => Ok(CardType::Onepiece),
            "mtg" => Ok(CardType::Mtg),
            _ => Err(()),
        }
    }
}

/// English key (normalized, lowercase) -> Japanese text, for one category.
/// BTreeMap so exported JSON is stable and diffs cleanly.
pub type CategoryConfig = BTreeMap<String, String>;

/// All categories of one dictionary layer (default or user).
pub type FullConfig = BTreeMap<CardType, CategoryConfig>;

/// The outcome of one name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationResult {
    pub japanese_text: String,
    /// True if at least one token had to be romanized instead of found in
    /// the effective dictionary. Signals the result may deserve a saved
    /// override.
    pub not_in_list: bool,
}

/// Immutable record of a past resolution, kept in the bounded recency list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub card_name: String,
    pub card_type: CardType,
    pub japanese_text: String,
    pub timestamp_ms: i64,
}

impl RecentSearch {
    pub fn new(card_name: &str, card_type: CardType, japanese_text: &str) -> Self {
        Self {
            card_name: card_name.to_string(),
            card_type,
            japanese_text: japanese_text.to_string(),
            timestamp_ms: chrono::Utc::now().timestamp_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_type_round_trips_through_str() {
        for ct in CardType::ALL {
            assert_eq!(ct.as_str().parse::<CardType>(), Ok(ct));
        }
        assert!("yugioh".parse::<CardType>().is_err());
    }

    #[test]
    fn card_type_serializes_as_lowercase_string() {
        assert_eq!(
            serde_json::to_string(&CardType::Onepiece).unwrap(),
            "\"onepiece\""
        );
        let back: CardType = serde_json::from_str("\"mtg\"").unwrap();
        assert_eq!(back, CardType::Mtg);
    }
}
