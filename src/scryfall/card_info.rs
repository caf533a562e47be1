use std::collections::BTreeSet;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cards::color::Color;
use crate::cards::price::UsdPrice;
use crate::cards::rarity::Rarity;

/// A catalog search hit: the card fields the tracker consumes, extracted
/// from a raw Scryfall card payload. This is the shape the excluded HTTP
/// layer hands over and the shape new `OwnedCard`s are created from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardInfo {
    pub scryfall_id: String,
    pub name: String,
    pub set_code: String,
    pub set_name: String,
    pub collector_number: String,
    pub rarity: Rarity,
    pub mana_value: f64,
    pub colors: BTreeSet<Color>,
    pub type_line: String,
    pub image_small: String,
    pub image_normal: String,
    pub price_usd: Option<UsdPrice>,
    pub price_usd_foil: Option<UsdPrice>,
}

impl CardInfo {
    /// Maps one raw catalog card object to the fields the tracker keeps.
    /// `id` and `name` are required; everything else degrades to empty or
    /// None so a sparse payload still produces a usable hit.
    pub fn from_scryfall(obj: &Value) -> Result<Self, String> {
        let scryfall_id = obj["id"]
            .as_str()
            .ok_or("Card payload has no id")?
            .to_string();
        let name = obj["name"]
            .as_str()
            .ok_or("Card payload has no name")?
            .to_string();

        // Double-faced cards keep their images on the first face
        let image_uris = if obj["image_uris"].is_object() {
            &obj["image_uris"]
        } else {
            &obj["card_faces"][0]["image_uris"]
        };

        let colors = obj["colors"]
            .as_array()
            .map(|values| {
                values
                    .iter()
                    .filter_map(|v| v.as_str())
                    .filter_map(Color::parse)
                    .collect()
            })
            .unwrap_or_default();

        let rarity = obj["rarity"]
            .as_str()
            .and_then(Rarity::parse)
            .unwrap_or(Rarity::Special);

        Ok(CardInfo {
            scryfall_id,
            name,
            set_code: field_as_string(obj, "set"),
            set_name: field_as_string(obj, "set_name"),
            collector_number: field_as_string(obj, "collector_number"),
            rarity,
            mana_value: obj["cmc"].as_f64().unwrap_or(0.0),
            colors,
            type_line: field_as_string(obj, "type_line"),
            image_small: image_uris["small"].as_str().unwrap_or("").to_string(),
            image_normal: image_uris["normal"].as_str().unwrap_or("").to_string(),
            price_usd: price_field(obj, "usd"),
            price_usd_foil: price_field(obj, "usd_foil"),
        })
    }
}

fn field_as_string(obj: &Value, key: &str) -> String {
    obj[key].as_str().unwrap_or("").to_string()
}

/// Catalog prices arrive as decimal strings, but some dumps carry raw
/// numbers, so both are accepted.
fn price_field(obj: &Value, key: &str) -> Option<UsdPrice> {
    obj["prices"][key]
        .as_str()
        .and_then(UsdPrice::parse)
        .or_else(|| obj["prices"][key].as_f64().map(UsdPrice::from_f64))
}

/// Maps a list of raw catalog cards, skipping entries that cannot be
/// extracted instead of failing the whole batch.
pub fn parse_card_list(payload: &Value) -> Vec<CardInfo> {
    let mut cards = Vec::new();
    if let Value::Array(entries) = payload {
        for obj in entries {
            match CardInfo::from_scryfall(obj) {
                Ok(card) => cards.push(card),
                Err(e) => {
                    debug!("Skipping catalog entry: {}", e);
                }
            }
        }
    }
    cards
}
