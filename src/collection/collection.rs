use std::collections::HashMap;

use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cards::condition::Condition;
use crate::cards::deck::{Deck, DeckSeed};
use crate::cards::owned_card::OwnedCard;
use crate::cards::price::UsdPrice;
use crate::scryfall::card_info::CardInfo;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CollectionError {
    #[error("no card with id {0} in the collection")]
    CardNotFound(i64),
    #[error("no deck with id {0} in the collection")]
    DeckNotFound(i64),
    #[error("card quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),
}

/// Ownership details for a card being added; the print attributes come
/// from the catalog hit.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCardRequest {
    pub quantity: u32,
    pub foil: bool,
    pub condition: Condition,
    pub notes: String,
}

impl Default for AddCardRequest {
    fn default() -> Self {
        Self {
            quantity: 1,
            foil: false,
            condition: Condition::default(),
            notes: String::new(),
        }
    }
}

/// Partial update of the user-owned fields. Print attributes are not
/// reachable from here on purpose.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardUpdate {
    pub quantity: Option<u32>,
    pub condition: Option<Condition>,
    pub foil: Option<bool>,
    pub notes: Option<String>,
}

/// Fresh catalog prices for one printing, keyed by scryfall id in a
/// refresh batch.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PriceUpdate {
    pub usd: Option<UsdPrice>,
    pub usd_foil: Option<UsdPrice>,
}

/// The owned collection: cards, decks, and the card-to-deck tags. The
/// query and stats engines read the card list as a snapshot; everything
/// here mutates it in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    cards: Vec<OwnedCard>,
    #[serde(default)]
    decks: Vec<Deck>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an already-materialized snapshot, e.g. one loaded from disk.
    pub fn from_cards(cards: Vec<OwnedCard>) -> Self {
        Collection {
            cards,
            decks: Vec::new(),
        }
    }

    pub fn cards(&self) -> &[OwnedCard] {
        &self.cards
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    pub fn card(&self, id: i64) -> Option<&OwnedCard> {
        self.cards.iter().find(|card| card.id == id)
    }

    pub fn deck(&self, id: i64) -> Option<&Deck> {
        self.decks.iter().find(|deck| deck.id == id)
    }

    fn next_card_id(&self) -> i64 {
        self.cards.iter().map(|card| card.id).max().unwrap_or(0) + 1
    }

    fn next_deck_id(&self) -> i64 {
        self.decks.iter().map(|deck| deck.id).max().unwrap_or(0) + 1
    }

    /// Adds copies of a printing. An existing entry for the same printing
    /// and finish just grows its quantity; otherwise a new entry is
    /// created from the catalog hit.
    pub fn add_card(
        &mut self,
        info: &CardInfo,
        request: &AddCardRequest,
    ) -> Result<&OwnedCard, CollectionError> {
        if request.quantity == 0 {
            return Err(CollectionError::InvalidQuantity(request.quantity));
        }

        let now = Utc::now();

        if let Some(index) = self.cards.iter().position(|card| {
            card.scryfall_id == info.scryfall_id && card.foil == request.foil
        }) {
            let card = &mut self.cards[index];
            card.quantity += request.quantity;
            card.updated_date = now;
            debug!(
                "Bumped quantity of '{}' ({}) to {}",
                card.name, card.scryfall_id, card.quantity
            );
            return Ok(&self.cards[index]);
        }

        let card = OwnedCard {
            id: self.next_card_id(),
            scryfall_id: info.scryfall_id.clone(),
            name: info.name.clone(),
            set_code: info.set_code.clone(),
            set_name: info.set_name.clone(),
            collector_number: info.collector_number.clone(),
            rarity: info.rarity,
            mana_value: info.mana_value,
            colors: info.colors.clone(),
            type_line: info.type_line.clone(),
            image_small: info.image_small.clone(),
            image_normal: info.image_normal.clone(),
            price_usd: info.price_usd,
            price_usd_foil: info.price_usd_foil,
            price_updated: now,
            quantity: request.quantity,
            foil: request.foil,
            condition: request.condition,
            notes: request.notes.clone(),
            deck_ids: Vec::new(),
            added_date: now,
            updated_date: now,
        };
        info!("Added '{}' x{} to the collection", card.name, card.quantity);
        self.cards.push(card);
        Ok(self.cards.last().unwrap())
    }

    /// Updates the ownership fields of an entry. Quantity zero is rejected;
    /// removing an entry is an explicit operation instead.
    pub fn update_card(
        &mut self,
        id: i64,
        update: &CardUpdate,
    ) -> Result<&OwnedCard, CollectionError> {
        if update.quantity == Some(0) {
            return Err(CollectionError::InvalidQuantity(0));
        }

        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == id)
            .ok_or(CollectionError::CardNotFound(id))?;

        if let Some(quantity) = update.quantity {
            card.quantity = quantity;
        }
        if let Some(condition) = update.condition {
            card.condition = condition;
        }
        if let Some(foil) = update.foil {
            card.foil = foil;
        }
        if let Some(notes) = &update.notes {
            card.notes = notes.clone();
        }
        card.updated_date = Utc::now();

        Ok(self.card(id).unwrap())
    }

    pub fn remove_card(&mut self, id: i64) -> Result<OwnedCard, CollectionError> {
        let index = self
            .cards
            .iter()
            .position(|card| card.id == id)
            .ok_or(CollectionError::CardNotFound(id))?;
        let card = self.cards.remove(index);
        info!("Removed '{}' from the collection", card.name);
        Ok(card)
    }

    /// Merges a batch of fresh catalog prices into the collection, keyed by
    /// scryfall id. Only the price fields and their timestamp change.
    /// Returns how many entries were touched.
    pub fn apply_price_refresh(&mut self, updates: &HashMap<String, PriceUpdate>) -> usize {
        let now = Utc::now();
        let mut updated = 0;

        for card in &mut self.cards {
            if let Some(update) = updates.get(&card.scryfall_id) {
                // A printing with only a foil price still gets a usable
                // non-foil figure, same as the catalog feed does
                card.price_usd = update.usd.or(update.usd_foil);
                card.price_usd_foil = update.usd_foil;
                card.price_updated = now;
                updated += 1;
            }
        }

        info!("Refreshed prices for {} cards", updated);
        updated
    }

    pub fn add_deck(&mut self, seed: DeckSeed) -> &Deck {
        let now = Utc::now();
        let deck = Deck {
            id: self.next_deck_id(),
            name: seed.name,
            commander: seed.commander,
            format: seed.format,
            archidekt_url: seed.archidekt_url,
            description: seed.description,
            created_date: now,
            updated_date: now,
        };
        info!("Created deck '{}'", deck.name);
        self.decks.push(deck);
        self.decks.last().unwrap()
    }

    /// Deletes a deck and its tags. The cards themselves stay untouched.
    pub fn remove_deck(&mut self, id: i64) -> Result<Deck, CollectionError> {
        let index = self
            .decks
            .iter()
            .position(|deck| deck.id == id)
            .ok_or(CollectionError::DeckNotFound(id))?;
        let deck = self.decks.remove(index);

        for card in &mut self.cards {
            card.deck_ids.retain(|deck_id| *deck_id != id);
        }

        info!("Removed deck '{}'", deck.name);
        Ok(deck)
    }

    /// Tags a card into a deck. Tagging twice is a no-op.
    pub fn tag_card(&mut self, card_id: i64, deck_id: i64) -> Result<(), CollectionError> {
        if self.deck(deck_id).is_none() {
            return Err(CollectionError::DeckNotFound(deck_id));
        }
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == card_id)
            .ok_or(CollectionError::CardNotFound(card_id))?;

        if !card.deck_ids.contains(&deck_id) {
            card.deck_ids.push(deck_id);
        }
        Ok(())
    }

    pub fn untag_card(&mut self, card_id: i64, deck_id: i64) -> Result<(), CollectionError> {
        let card = self
            .cards
            .iter_mut()
            .find(|card| card.id == card_id)
            .ok_or(CollectionError::CardNotFound(card_id))?;
        card.deck_ids.retain(|id| *id != deck_id);
        Ok(())
    }

    /// How many collection entries are tagged into a deck.
    pub fn deck_card_count(&self, deck_id: i64) -> usize {
        self.cards
            .iter()
            .filter(|card| card.deck_ids.contains(&deck_id))
            .count()
    }
}
