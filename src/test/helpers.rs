use std::collections::BTreeSet;

use chrono::{TimeZone, Utc};

use crate::cards::color::Color;
use crate::cards::condition::Condition;
use crate::cards::owned_card::OwnedCard;
use crate::cards::price::UsdPrice;
use crate::cards::rarity::Rarity;
use crate::scryfall::card_info::CardInfo;

/// Base entry with fixed timestamps so orderings are reproducible; the
/// added date tracks the id.
pub fn owned_card(id: i64, name: &str) -> OwnedCard {
    let added = Utc.with_ymd_and_hms(2025, 1, id as u32, 12, 0, 0).unwrap();
    OwnedCard {
        id,
        scryfall_id: format!("00000000-0000-0000-0000-{:012}", id),
        name: name.to_string(),
        set_code: "tst".to_string(),
        set_name: "Test Set".to_string(),
        collector_number: format!("{}", id),
        rarity: Rarity::Common,
        mana_value: 0.0,
        colors: BTreeSet::new(),
        type_line: "".to_string(),
        image_small: "".to_string(),
        image_normal: "".to_string(),
        price_usd: None,
        price_usd_foil: None,
        price_updated: added,
        quantity: 1,
        foil: false,
        condition: Condition::NM,
        notes: "".to_string(),
        deck_ids: Vec::new(),
        added_date: added,
        updated_date: added,
    }
}

/// Two non-foil copies at 1.50.
pub fn lightning_bolt() -> OwnedCard {
    let mut card = owned_card(1, "Lightning Bolt");
    card.scryfall_id = "77c6fa74-5543-42ac-9ead-0e890b188e99".to_string();
    card.set_code = "clu".to_string();
    card.set_name = "Ravnica: Clue Edition".to_string();
    card.collector_number = "141".to_string();
    card.mana_value = 1.0;
    card.colors = [Color::R].into_iter().collect();
    card.type_line = "Instant".to_string();
    card.price_usd = Some(UsdPrice::from_cents(150));
    card.price_usd_foil = Some(UsdPrice::from_cents(450));
    card.quantity = 2;
    card
}

/// A foil copy with only a foil price; colorless.
pub fn sol_ring() -> OwnedCard {
    let mut card = owned_card(2, "Sol Ring");
    card.scryfall_id = "d11e6f67-2e9f-4e5c-b6cb-b24ee8654ad4".to_string();
    card.set_code = "c21".to_string();
    card.set_name = "Commander 2021".to_string();
    card.rarity = Rarity::Uncommon;
    card.mana_value = 1.0;
    card.type_line = "Artifact".to_string();
    card.price_usd = None;
    card.price_usd_foil = Some(UsdPrice::from_cents(400));
    card.foil = true;
    card
}

/// No price data at all.
pub fn storm_crow() -> OwnedCard {
    let mut card = owned_card(3, "Storm Crow");
    card.mana_value = 2.0;
    card.colors = [Color::U].into_iter().collect();
    card.type_line = "Creature — Bird".to_string();
    card
}

/// Multicolor (W,U).
pub fn azorius_charm() -> OwnedCard {
    let mut card = owned_card(4, "Azorius Charm");
    card.mana_value = 2.0;
    card.colors = [Color::W, Color::U].into_iter().collect();
    card.type_line = "Instant".to_string();
    card.price_usd = Some(UsdPrice::from_cents(75));
    card
}

/// The expensive mythic; the newest addition among the fixtures.
pub fn craterhoof_behemoth() -> OwnedCard {
    let mut card = owned_card(5, "Craterhoof Behemoth");
    card.rarity = Rarity::Mythic;
    card.mana_value = 8.0;
    card.colors = [Color::G].into_iter().collect();
    card.type_line = "Creature — Beast".to_string();
    card.price_usd = Some(UsdPrice::from_cents(2500));
    card
}

/// Catalog hit matching the `lightning_bolt` fixture.
pub fn lightning_bolt_info() -> CardInfo {
    CardInfo {
        scryfall_id: "77c6fa74-5543-42ac-9ead-0e890b188e99".to_string(),
        name: "Lightning Bolt".to_string(),
        set_code: "clu".to_string(),
        set_name: "Ravnica: Clue Edition".to_string(),
        collector_number: "141".to_string(),
        rarity: Rarity::Uncommon,
        mana_value: 1.0,
        colors: [Color::R].into_iter().collect(),
        type_line: "Instant".to_string(),
        image_small: "https://cards.scryfall.io/small/front/7/7/77c6fa74.jpg".to_string(),
        image_normal: "https://cards.scryfall.io/normal/front/7/7/77c6fa74.jpg".to_string(),
        price_usd: Some(UsdPrice::from_cents(150)),
        price_usd_foil: Some(UsdPrice::from_cents(450)),
    }
}
