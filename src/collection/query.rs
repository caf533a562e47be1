use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::color::{combo_key, Color};
use crate::cards::owned_card::OwnedCard;
use crate::cards::price::UsdPrice;
use crate::cards::rarity::Rarity;

/// Sort key for the collection view. Unknown strings degrade to Name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    Name,
    Price,
    Color,
    Type,
    Set,
    Rarity,
    Quantity,
    DateAdded,
}

impl SortKey {
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "name" => SortKey::Name,
            "price" | "price_usd" => SortKey::Price,
            "color" => SortKey::Color,
            "type" => SortKey::Type,
            "set" => SortKey::Set,
            "rarity" => SortKey::Rarity,
            "quantity" => SortKey::Quantity,
            "dateAdded" | "date_added" => SortKey::DateAdded,
            other => {
                debug!("Unknown sort key '{}', falling back to name", other);
                SortKey::Name
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }
}

/// Color facet of the collection view: a single color (set containment),
/// exactly colorless, or any multicolor entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorFilter {
    #[default]
    Any,
    Single(Color),
    Colorless,
    Multicolor,
}

impl ColorFilter {
    pub fn parse(value: &str) -> Self {
        if value.is_empty() {
            return ColorFilter::Any;
        }
        match value.to_lowercase().as_str() {
            "colorless" | "c" => ColorFilter::Colorless,
            "multicolor" | "m" => ColorFilter::Multicolor,
            other => match Color::parse(other) {
                Some(color) => ColorFilter::Single(color),
                None => {
                    debug!("Unknown color filter '{}', ignoring", value);
                    ColorFilter::Any
                }
            },
        }
    }
}

/// Everything the view sends down: free-text search, sort key and order,
/// and the three facet filters. Built from flat strings where empty means
/// "no filter" and unknown values degrade to the defaults.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    pub search: String,
    pub sort: SortKey,
    pub order: SortOrder,
    pub color: ColorFilter,
    pub rarity: Option<Rarity>,
    pub card_type: String,
}

impl QueryParams {
    pub fn from_strings(
        search: &str,
        sort: &str,
        order: &str,
        color: &str,
        rarity: &str,
        card_type: &str,
    ) -> Self {
        QueryParams {
            search: search.to_string(),
            sort: SortKey::parse(sort),
            order: SortOrder::parse(order),
            color: ColorFilter::parse(color),
            rarity: Rarity::parse(rarity),
            card_type: card_type.to_string(),
        }
    }
}

/// The filtered, ordered collection view. `total_count` counts the whole
/// snapshot so the caller can render "showing X of Y"; `total_value` sums
/// only the filtered items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub items: Vec<OwnedCard>,
    pub total_count: usize,
    pub total_value: UsdPrice,
}

/// Applies the filters conjunctively, then sorts. Pure: same snapshot and
/// params always give the same ordering (ties fall back to name, then id).
pub fn query(collection: &[OwnedCard], params: &QueryParams) -> QueryResult {
    let search = params.search.to_lowercase();
    let card_type = params.card_type.to_lowercase();

    let mut items: Vec<OwnedCard> = collection
        .iter()
        .filter(|card| matches_filters(card, params, &search, &card_type))
        .cloned()
        .collect();

    items.sort_by(|a, b| compare_cards(a, b, params));

    let total_value = items.iter().map(OwnedCard::total_value).sum();

    QueryResult {
        items,
        total_count: collection.len(),
        total_value,
    }
}

fn matches_filters(card: &OwnedCard, params: &QueryParams, search: &str, card_type: &str) -> bool {
    if !search.is_empty() && !card.name.to_lowercase().contains(search) {
        return false;
    }

    match params.color {
        ColorFilter::Any => {}
        ColorFilter::Single(color) => {
            if !card.colors.contains(&color) {
                return false;
            }
        }
        ColorFilter::Colorless => {
            if !card.colors.is_empty() {
                return false;
            }
        }
        ColorFilter::Multicolor => {
            if !card.is_multicolor() {
                return false;
            }
        }
    }

    if let Some(rarity) = params.rarity {
        if card.rarity != rarity {
            return false;
        }
    }

    if !card_type.is_empty() && !card.type_line.to_lowercase().contains(card_type) {
        return false;
    }

    true
}

fn compare_cards(a: &OwnedCard, b: &OwnedCard, params: &QueryParams) -> Ordering {
    let primary = match params.sort {
        // Entries without an effective price always land at the end,
        // under either direction
        SortKey::Price => match (a.effective_price(), b.effective_price()) {
            (Some(x), Some(y)) => apply_order(x.cmp(&y), params.order),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
        SortKey::Name => apply_order(
            a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            params.order,
        ),
        SortKey::Color => apply_order(combo_key(&a.colors).cmp(&combo_key(&b.colors)), params.order),
        SortKey::Type => apply_order(
            a.type_line.to_lowercase().cmp(&b.type_line.to_lowercase()),
            params.order,
        ),
        SortKey::Set => apply_order(
            a.set_name.to_lowercase().cmp(&b.set_name.to_lowercase()),
            params.order,
        ),
        SortKey::Rarity => apply_order(a.rarity.cmp(&b.rarity), params.order),
        SortKey::Quantity => apply_order(a.quantity.cmp(&b.quantity), params.order),
        SortKey::DateAdded => apply_order(a.added_date.cmp(&b.added_date), params.order),
    };

    primary
        .then_with(|| a.name.to_lowercase().cmp(&b.name.to_lowercase()))
        .then_with(|| a.id.cmp(&b.id))
}

fn apply_order(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

#[cfg(test)]
mod tests {
    use crate::test::helpers::{
        azorius_charm, craterhoof_behemoth, lightning_bolt, sol_ring, storm_crow,
    };

    use super::*;

    fn snapshot() -> Vec<OwnedCard> {
        vec![
            lightning_bolt(),
            sol_ring(),
            storm_crow(),
            azorius_charm(),
            craterhoof_behemoth(),
        ]
    }

    fn names(result: &QueryResult) -> Vec<&str> {
        result.items.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_no_filters_returns_everything_sorted_by_name() {
        let cards = snapshot();
        let result = query(&cards, &QueryParams::default());

        assert_eq!(result.items.len(), cards.len());
        assert_eq!(result.total_count, cards.len());
        assert_eq!(
            names(&result),
            vec![
                "Azorius Charm",
                "Craterhoof Behemoth",
                "Lightning Bolt",
                "Sol Ring",
                "Storm Crow"
            ]
        );
    }

    #[test]
    fn test_search_matches_name_substring_case_insensitively() {
        let cards = snapshot();
        let params = QueryParams::from_strings("RING", "", "", "", "", "");
        let result = query(&cards, &params);

        assert_eq!(names(&result), vec!["Sol Ring"]);
        // total_count still counts the unfiltered snapshot
        assert_eq!(result.total_count, cards.len());
    }

    #[test]
    fn test_color_filter_variants() {
        let cards = snapshot();

        let red = query(&cards, &QueryParams::from_strings("", "", "", "R", "", ""));
        assert_eq!(names(&red), vec!["Lightning Bolt"]);

        // Containment: the W,U charm shows up under a single-color W filter
        let white = query(&cards, &QueryParams::from_strings("", "", "", "W", "", ""));
        assert_eq!(names(&white), vec!["Azorius Charm"]);

        let colorless = query(
            &cards,
            &QueryParams::from_strings("", "", "", "colorless", "", ""),
        );
        assert_eq!(names(&colorless), vec!["Sol Ring"]);

        let multicolor = query(
            &cards,
            &QueryParams::from_strings("", "", "", "multicolor", "", ""),
        );
        assert_eq!(names(&multicolor), vec!["Azorius Charm"]);

        // Unknown color value degrades to no filter
        let unknown = query(&cards, &QueryParams::from_strings("", "", "", "Z", "", ""));
        assert_eq!(unknown.items.len(), cards.len());
    }

    #[test]
    fn test_filters_are_conjunctive_and_order_independent() {
        let cards = snapshot();
        let both = query(
            &cards,
            &QueryParams::from_strings("", "", "", "U", "common", ""),
        );

        // Applying one filter to the output of the other gives the same set,
        // in either order
        let blue = query(&cards, &QueryParams::from_strings("", "", "", "U", "", ""));
        let blue_then_common = query(
            &blue.items,
            &QueryParams::from_strings("", "", "", "", "common", ""),
        );
        let common = query(
            &cards,
            &QueryParams::from_strings("", "", "", "", "common", ""),
        );
        let common_then_blue = query(
            &common.items,
            &QueryParams::from_strings("", "", "", "U", "", ""),
        );

        assert_eq!(names(&both), names(&blue_then_common));
        assert_eq!(names(&both), names(&common_then_blue));
    }

    #[test]
    fn test_type_filter_matches_type_line_substring() {
        let cards = snapshot();
        let result = query(
            &cards,
            &QueryParams::from_strings("", "", "", "", "", "creature"),
        );
        assert_eq!(names(&result), vec!["Craterhoof Behemoth", "Storm Crow"]);
    }

    #[test]
    fn test_price_sort_puts_unpriced_entries_last_in_both_directions() {
        let cards = snapshot();

        let asc = query(
            &cards,
            &QueryParams::from_strings("", "price", "asc", "", "", ""),
        );
        assert_eq!(asc.items.last().unwrap().name, "Storm Crow");

        let desc = query(
            &cards,
            &QueryParams::from_strings("", "price", "desc", "", "", ""),
        );
        assert_eq!(desc.items.last().unwrap().name, "Storm Crow");
        assert_eq!(desc.items[0].name, "Craterhoof Behemoth");
    }

    #[test]
    fn test_rarity_sort_descending() {
        let cards = snapshot();
        let result = query(
            &cards,
            &QueryParams::from_strings("", "rarity", "desc", "", "", ""),
        );
        assert_eq!(result.items[0].name, "Craterhoof Behemoth");
        assert_eq!(result.items.last().unwrap().name, "Storm Crow");
    }

    #[test]
    fn test_date_added_sort() {
        let cards = snapshot();
        let result = query(
            &cards,
            &QueryParams::from_strings("", "dateAdded", "desc", "", "", ""),
        );
        // Fixtures are dated in insertion order, newest fixture last added
        assert_eq!(result.items[0].name, "Craterhoof Behemoth");
    }

    #[test]
    fn test_unknown_sort_key_degrades_to_name() {
        let cards = snapshot();
        let by_unknown = query(
            &cards,
            &QueryParams::from_strings("", "bogus", "asc", "", "", ""),
        );
        let by_name = query(
            &cards,
            &QueryParams::from_strings("", "name", "asc", "", "", ""),
        );
        assert_eq!(names(&by_unknown), names(&by_name));
    }

    #[test]
    fn test_query_is_idempotent() {
        let cards = snapshot();
        let params = QueryParams::from_strings("o", "price", "desc", "", "", "");

        let first = query(&cards, &params);
        let second = query(&cards, &params);
        assert_eq!(first, second);
    }

    #[test]
    fn test_total_value_sums_filtered_items_only() {
        let cards = snapshot();
        let result = query(&cards, &QueryParams::from_strings("bolt", "", "", "", "", ""));

        // Two copies of Lightning Bolt at 1.50
        assert_eq!(result.total_value, UsdPrice::from_cents(300));
        assert_eq!(result.total_value.to_string(), "3.00");
    }

    #[test]
    fn test_unpriced_entries_contribute_zero_to_total_value() {
        let cards = vec![storm_crow()];
        let result = query(&cards, &QueryParams::default());
        assert_eq!(result.total_value, UsdPrice::from_cents(0));
    }
}
