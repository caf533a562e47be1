pub const DEFAULT_COLLECTION_PATH: &str = "collection.json";
pub const DEFAULT_EXPORT_DIR: &str = "exports";
pub const EXPORT_FILE_PREFIX: &str = "collection_view_";
pub const DEFAULT_MIN_QUERY_LENGTH: usize = 2;
