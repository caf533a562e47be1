use chrono::{DateTime, Local};

/// Formats a timestamp for dated file names, defaulting to now and to a
/// filesystem-safe format.
pub fn date_time_as_string(dt: Option<DateTime<Local>>, format: Option<&str>) -> String {
    dt.unwrap_or_else(Local::now)
        .format(format.unwrap_or("%Y-%m-%d_%H-%M"))
        .to_string()
}
