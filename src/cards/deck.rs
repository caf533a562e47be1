use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named deck cards can be tagged into. Membership lives on the cards
/// (`OwnedCard::deck_ids`), so a deck row carries metadata only and its
/// card count is derived by the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub commander: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub archidekt_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

/// Metadata for a deck about to be created; the collection assigns the id
/// and the timestamps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeckSeed {
    pub name: String,
    pub commander: Option<String>,
    pub format: Option<String>,
    pub archidekt_url: Option<String>,
    pub description: Option<String>,
}
