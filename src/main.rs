use log::{error, info};

use mtg_collection_tracker::cards::owned_card::OwnedCard;
use mtg_collection_tracker::collection::query::{query, QueryParams};
use mtg_collection_tracker::collection::stats::aggregate;
use mtg_collection_tracker::search::ranker::rank_by_relevance;
use mtg_collection_tracker::utilities::config::CONFIG;
use mtg_collection_tracker::utilities::constants::EXPORT_FILE_PREFIX;
use mtg_collection_tracker::utilities::file_management::{load_from_json_file, save_to_file};
use mtg_collection_tracker::utilities::string_manipulators::date_time_as_string;

/// Fixed display names for the color-identity combination keys the stats
/// engine emits.
fn combo_label(key: &str) -> &str {
    match key {
        "W" => "White",
        "U" => "Blue",
        "B" => "Black",
        "R" => "Red",
        "G" => "Green",
        "U,W" => "Azorius",
        "B,U" => "Dimir",
        "B,R" => "Rakdos",
        "G,R" => "Gruul",
        "G,W" => "Selesnya",
        "B,W" => "Orzhov",
        "R,U" => "Izzet",
        "B,G" => "Golgari",
        "R,W" => "Boros",
        "G,U" => "Simic",
        "B,U,W" => "Esper",
        "B,R,U" => "Grixis",
        "B,G,R" => "Jund",
        "G,R,W" => "Naya",
        "G,U,W" => "Bant",
        "B,G,W" => "Abzan",
        "R,U,W" => "Jeskai",
        "B,G,U" => "Sultai",
        "B,R,W" => "Mardu",
        "G,R,U" => "Temur",
        "B,R,U,W" => "Yore-Tiller",
        "B,G,R,U" => "Glint-Eye",
        "B,G,R,W" => "Dune-Brood",
        "G,R,U,W" => "Ink-Treader",
        "B,G,U,W" => "Witch-Maw",
        "B,G,R,U,W" => "Five-Color",
        other => other,
    }
}

fn main() {
    env_logger::init();
    info!("Starting collection report");

    let cards = match load_from_json_file::<Vec<OwnedCard>>(&CONFIG.collection_path) {
        Ok(cards) => cards,
        Err(e) => {
            error!(
                "Failed to load collection from '{}': {}",
                CONFIG.collection_path, e
            );
            Vec::new()
        }
    };

    let params = QueryParams::from_strings(
        &CONFIG.search,
        &CONFIG.sort,
        &CONFIG.order,
        &CONFIG.color,
        &CONFIG.rarity,
        &CONFIG.card_type,
    );
    let result = query(&cards, &params);

    println!(
        "Showing {} of {} cards, filtered value {} USD",
        result.items.len(),
        result.total_count,
        result.total_value
    );
    for card in &result.items {
        let price = match card.effective_price() {
            Some(price) => format!("{} USD", price),
            None => "n/a".to_string(),
        };
        println!(
            "  {} x{} [{}] ({}) {}",
            card.name, card.quantity, card.set_code, card.condition, price
        );
    }

    if CONFIG.search.len() >= CONFIG.min_query_length {
        let ranked = rank_by_relevance(result.items.clone(), &CONFIG.search);
        if let Some(best) = ranked.first() {
            println!("Closest match for '{}': {}", CONFIG.search, best.name);
        }
    }

    let stats = aggregate(&cards);
    println!();
    println!(
        "Collection: {} cards ({} unique), total value {} USD, average price {} USD",
        stats.total_cards, stats.unique_cards, stats.total_value, stats.avg_price
    );
    for (rarity, count) in &stats.rarity_counts {
        println!("  {}: {}", rarity, count);
    }
    println!("Mana curve:");
    for (mana_value, count) in &stats.mana_value_counts {
        println!("  {}: {}", mana_value, count);
    }
    println!("Types:");
    for (card_type, count) in stats.type_counts_sorted() {
        println!("  {}: {}", card_type, count);
    }
    println!("Color identities:");
    for combo in &stats.color_combo_counts {
        println!("  {}: {}", combo_label(&combo.name), combo.count);
    }

    let export_path = format!(
        "{}/{}{}.json",
        CONFIG.export_dir,
        EXPORT_FILE_PREFIX,
        date_time_as_string(None, None)
    );
    match save_to_file(&export_path, &result.items) {
        Ok(()) => info!("Saved filtered view to {}", export_path),
        Err(e) => error!("Failed to save filtered view to {}: {}", export_path, e),
    }
}
