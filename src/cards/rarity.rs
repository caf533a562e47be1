use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Print rarity of a card. Variant order doubles as the sort order used by
/// the collection view, promo-style rarities below common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Bonus,
    Special,
    Common,
    Uncommon,
    Rare,
    Mythic,
}

impl Rarity {
    /// Maps a filter string to a rarity. Unknown values mean "no filter" for
    /// the caller, so this returns None instead of guessing.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_lowercase().as_str() {
            "common" => Some(Rarity::Common),
            "uncommon" => Some(Rarity::Uncommon),
            "rare" => Some(Rarity::Rare),
            "mythic" => Some(Rarity::Mythic),
            "special" => Some(Rarity::Special),
            "bonus" => Some(Rarity::Bonus),
            _ => None,
        }
    }
}

impl fmt::Display for Rarity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Rarity::Common => write!(f, "common"),
            Rarity::Uncommon => write!(f, "uncommon"),
            Rarity::Rare => write!(f, "rare"),
            Rarity::Mythic => write!(f, "mythic"),
            Rarity::Special => write!(f, "special"),
            Rarity::Bonus => write!(f, "bonus"),
        }
    }
}

impl<'de> Deserialize<'de> for Rarity {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Snapshots carrying an odd promo rarity still load
        let s = String::deserialize(deserializer)?;
        Ok(Rarity::parse(&s).unwrap_or(Rarity::Special))
    }
}
