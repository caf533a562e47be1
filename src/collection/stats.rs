use std::collections::BTreeMap;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::cards::color::{combo_key, Color, COLORLESS_KEY};
use crate::cards::owned_card::OwnedCard;
use crate::cards::price::UsdPrice;
use crate::cards::rarity::Rarity;

/// Card types recognized when deriving a primary type from a type line.
const CARD_TYPES: [&str; 8] = [
    "Creature",
    "Planeswalker",
    "Instant",
    "Sorcery",
    "Enchantment",
    "Artifact",
    "Land",
    "Battle",
];

const OTHER_TYPE: &str = "Other";

/// One color-identity combination and how many cards carry it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorComboCount {
    pub name: String,
    pub count: u64,
}

/// Aggregate view over a collection snapshot. All counts weigh entries by
/// owned quantity; `unique_cards` alone counts entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionStats {
    pub total_cards: u64,
    pub unique_cards: u64,
    pub total_value: UsdPrice,
    pub avg_price: UsdPrice,
    pub rarity_counts: BTreeMap<Rarity, u64>,
    pub color_counts: BTreeMap<String, u64>,
    pub mana_value_counts: BTreeMap<String, u64>,
    pub type_counts: BTreeMap<String, u64>,
    pub color_combo_counts: Vec<ColorComboCount>,
}

impl CollectionStats {
    /// Type counts in presentation order: most common type first, ties
    /// alphabetical.
    pub fn type_counts_sorted(&self) -> Vec<(String, u64)> {
        self.type_counts
            .iter()
            .map(|(name, count)| (name.clone(), *count))
            .sorted_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)))
            .collect()
    }
}

/// Computes the stats view in one pass over the snapshot. Pure; entries
/// without a price are skipped by the value figures rather than counted
/// as zero-priced.
pub fn aggregate(collection: &[OwnedCard]) -> CollectionStats {
    let mut total_cards: u64 = 0;
    let mut total_value = UsdPrice::default();
    let mut priced_entries: u64 = 0;
    let mut unit_price_sum = UsdPrice::default();

    let mut rarity_counts: BTreeMap<Rarity, u64> = BTreeMap::new();
    // All six single-color buckets are always present, even at zero
    let mut color_counts: BTreeMap<String, u64> = Color::ALL
        .iter()
        .map(|color| (color.symbol().to_string(), 0))
        .chain([(COLORLESS_KEY.to_string(), 0)])
        .collect();
    let mut mana_value_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut type_counts: BTreeMap<String, u64> = BTreeMap::new();
    let mut combo_counts: BTreeMap<String, u64> = BTreeMap::new();

    for card in collection {
        let quantity = card.quantity as u64;
        total_cards += quantity;

        if let Some(price) = card.effective_price() {
            priced_entries += 1;
            unit_price_sum = unit_price_sum + price;
            total_value = total_value + price.times(card.quantity);
        }

        *rarity_counts.entry(card.rarity).or_insert(0) += quantity;

        // Exact-set bucketing: a multicolor card lands in no single-color
        // bucket, only in its combination below
        if card.colors.is_empty() {
            *color_counts.get_mut(COLORLESS_KEY).unwrap() += quantity;
        } else if card.colors.len() == 1 {
            let symbol = card.colors.iter().next().unwrap().symbol();
            *color_counts.get_mut(symbol).unwrap() += quantity;
        }

        *mana_value_counts
            .entry(mana_value_key(card.mana_value))
            .or_insert(0) += quantity;

        *type_counts
            .entry(primary_type(&card.type_line).to_string())
            .or_insert(0) += quantity;

        *combo_counts.entry(combo_key(&card.colors)).or_insert(0) += quantity;
    }

    let avg_price = if priced_entries > 0 {
        // Mean unit price over priced entries, rounded to the cent
        UsdPrice::from_cents(
            (unit_price_sum.cents() + priced_entries as i64 / 2) / priced_entries as i64,
        )
    } else {
        UsdPrice::default()
    };

    let color_combo_counts = combo_counts
        .into_iter()
        .map(|(name, count)| ColorComboCount { name, count })
        .sorted_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)))
        .collect();

    CollectionStats {
        total_cards,
        unique_cards: collection.len() as u64,
        total_value,
        avg_price,
        rarity_counts,
        color_counts,
        mana_value_counts,
        type_counts,
        color_combo_counts,
    }
}

/// Canonical bucket key for a mana value: whole values render without a
/// fraction, odd ones (half costs and the like) keep theirs.
fn mana_value_key(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// First standard card type on the front face of a type line, taken before
/// any em dash. "Legendary Creature — Elf Druid" is a Creature; lines with
/// no recognized type fall into "Other".
fn primary_type(type_line: &str) -> &'static str {
    let front_face = type_line.split("//").next().unwrap_or("");
    let before_dash = front_face.split('—').next().unwrap_or("");

    for token in before_dash.split_whitespace() {
        if let Some(&card_type) = CARD_TYPES.iter().find(|&&t| t == token) {
            return card_type;
        }
    }
    OTHER_TYPE
}
