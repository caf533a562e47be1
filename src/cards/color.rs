use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub const COLORLESS_KEY: &str = "Colorless";

/// One of the five mana colors. Variants are declared alphabetically so that
/// an ordered set of colors yields the canonical combination key directly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Color {
    B,
    G,
    R,
    U,
    W,
}

impl Color {
    pub const ALL: [Color; 5] = [Color::W, Color::U, Color::B, Color::R, Color::G];

    pub fn parse(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "W" => Some(Color::W),
            "U" => Some(Color::U),
            "B" => Some(Color::B),
            "R" => Some(Color::R),
            "G" => Some(Color::G),
            _ => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Color::W => "W",
            Color::U => "U",
            Color::B => "B",
            Color::R => "R",
            Color::G => "G",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Combination key for a color set: the sorted comma-joined symbols, or the
/// colorless key for an empty set. "U,W" and "B,G,R" style keys are what the
/// stats consumers map to guild and shard names.
pub fn combo_key(colors: &BTreeSet<Color>) -> String {
    if colors.is_empty() {
        return COLORLESS_KEY.to_string();
    }
    colors
        .iter()
        .map(Color::symbol)
        .collect::<Vec<_>>()
        .join(",")
}
