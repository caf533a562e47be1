use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::color::Color;
use super::condition::Condition;
use super::price::UsdPrice;
use super::rarity::Rarity;

/// One entry of the collection: a specific printing, owned in some quantity.
///
/// Print attributes come from the card catalog and are never touched by
/// collection operations; only the ownership block and the price fields
/// change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedCard {
    pub id: i64,
    pub scryfall_id: String,

    // Print attributes
    pub name: String,
    pub set_code: String,
    #[serde(default)]
    pub set_name: String,
    #[serde(default)]
    pub collector_number: String,
    pub rarity: Rarity,
    #[serde(default)]
    pub mana_value: f64,
    #[serde(default)]
    pub colors: BTreeSet<Color>,
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub image_small: String,
    #[serde(default)]
    pub image_normal: String,

    // Pricing, refreshed from the catalog
    #[serde(default)]
    pub price_usd: Option<UsdPrice>,
    #[serde(default)]
    pub price_usd_foil: Option<UsdPrice>,
    pub price_updated: DateTime<Utc>,

    // Ownership
    pub quantity: u32,
    pub foil: bool,
    #[serde(default)]
    pub condition: Condition,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub deck_ids: Vec<i64>,

    pub added_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl OwnedCard {
    /// The unit price this copy is worth: the foil price when the copy is
    /// foil and that price exists, otherwise the non-foil price. None when
    /// the catalog has no usable price at all.
    pub fn effective_price(&self) -> Option<UsdPrice> {
        if self.foil {
            self.price_usd_foil.or(self.price_usd)
        } else {
            self.price_usd
        }
    }

    /// Effective price times owned quantity; entries without a price count
    /// as zero so totals never fail on partial data.
    pub fn total_value(&self) -> UsdPrice {
        self.effective_price()
            .map(|price| price.times(self.quantity))
            .unwrap_or_default()
    }

    pub fn is_multicolor(&self) -> bool {
        self.colors.len() > 1
    }
}
