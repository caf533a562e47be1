use std::fmt;

use serde::{Deserialize, Serialize};

/// Physical condition of an owned copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Condition {
    #[default]
    NM,
    LP,
    MP,
    HP,
    DMG,
}

impl Condition {
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "NM" => Some(Condition::NM),
            "LP" => Some(Condition::LP),
            "MP" => Some(Condition::MP),
            "HP" => Some(Condition::HP),
            "DMG" => Some(Condition::DMG),
            _ => None,
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Condition::NM => write!(f, "NM"),
            Condition::LP => write!(f, "LP"),
            Condition::MP => write!(f, "MP"),
            Condition::HP => write!(f, "HP"),
            Condition::DMG => write!(f, "DMG"),
        }
    }
}
