use std::error::Error;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Writes a value as JSON, creating parent directories as needed.
pub fn save_to_file<T: Serialize>(path: &str, data: &T) -> Result<(), Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string(data)?;
    fs::write(path, json)?;
    Ok(())
}

pub fn load_from_json_file<T: DeserializeOwned>(path: &str) -> Result<T, Box<dyn Error>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}
