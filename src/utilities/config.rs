use std::env;

use super::constants::{
    DEFAULT_COLLECTION_PATH, DEFAULT_EXPORT_DIR, DEFAULT_MIN_QUERY_LENGTH,
};

/// Runtime settings for the report binary, read from the environment once
/// at startup. The view parameters mirror what the web UI would send as
/// query-string values; empty means "no filter".
#[derive(Debug, Clone)]
pub struct Config {
    pub collection_path: String,
    pub export_dir: String,
    pub min_query_length: usize,
    pub search: String,
    pub sort: String,
    pub order: String,
    pub color: String,
    pub rarity: String,
    pub card_type: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            collection_path: DEFAULT_COLLECTION_PATH.to_string(),
            export_dir: DEFAULT_EXPORT_DIR.to_string(),
            min_query_length: DEFAULT_MIN_QUERY_LENGTH,
            search: "".to_string(),
            sort: "".to_string(),
            order: "".to_string(),
            color: "".to_string(),
            rarity: "".to_string(),
            card_type: "".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.update_from_env();
        config
    }

    fn update_from_env(&mut self) {
        if let Ok(collection_path) = env::var("COLLECTION_PATH") {
            self.collection_path = collection_path;
        }
        if let Ok(export_dir) = env::var("EXPORT_DIR") {
            self.export_dir = export_dir;
        }
        if let Ok(min_query_length) = env::var("MIN_QUERY_LEN") {
            self.min_query_length = min_query_length
                .parse()
                .unwrap_or(DEFAULT_MIN_QUERY_LENGTH);
        }
        if let Ok(search) = env::var("SEARCH") {
            self.search = search;
        }
        if let Ok(sort) = env::var("SORT") {
            self.sort = sort;
        }
        if let Ok(order) = env::var("ORDER") {
            self.order = order;
        }
        if let Ok(color) = env::var("COLOR") {
            self.color = color;
        }
        if let Ok(rarity) = env::var("RARITY") {
            self.rarity = rarity;
        }
        if let Ok(card_type) = env::var("TYPE") {
            self.card_type = card_type;
        }
    }
}

lazy_static::lazy_static! {
    pub static ref CONFIG: Config = Config::new();
}
