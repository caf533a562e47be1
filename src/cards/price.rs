use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::Add;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// USD amount held as whole cents, so sums over the collection stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct UsdPrice {
    cents: i64,
}

impl UsdPrice {
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Parses a decimal amount like "1.50", "0.5" or "12". At most two
    /// fraction digits are accepted, matching the wire format.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let (dollars, fraction) = match text.split_once('.') {
            Some((dollars, fraction)) => (dollars, fraction),
            None => (text, ""),
        };

        if fraction.len() > 2 || !fraction.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }

        let dollars: i64 = if dollars.is_empty() {
            0
        } else {
            dollars.parse().ok()?
        };
        let cents: i64 = if fraction.is_empty() {
            0
        } else {
            // "5" means 50 cents, "05" means 5
            let parsed: i64 = fraction.parse().ok()?;
            if fraction.len() == 1 {
                parsed * 10
            } else {
                parsed
            }
        };

        if dollars < 0 {
            return None;
        }

        Some(Self {
            cents: dollars * 100 + cents,
        })
    }

    pub fn from_f64(amount: f64) -> Self {
        Self {
            cents: (amount * 100.0).round() as i64,
        }
    }

    pub fn times(&self, quantity: u32) -> Self {
        Self {
            cents: self.cents * quantity as i64,
        }
    }
}

impl Add for UsdPrice {
    type Output = UsdPrice;

    fn add(self, other: UsdPrice) -> UsdPrice {
        UsdPrice {
            cents: self.cents + other.cents,
        }
    }
}

impl Sum for UsdPrice {
    fn sum<I: Iterator<Item = UsdPrice>>(iter: I) -> Self {
        iter.fold(UsdPrice::default(), |total, price| total + price)
    }
}

impl PartialOrd for UsdPrice {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for UsdPrice {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cents.cmp(&other.cents)
    }
}

impl fmt::Display for UsdPrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}

impl Serialize for UsdPrice {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        // Amounts travel as two-decimal strings, same as the card catalog
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for UsdPrice {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawAmount {
            Text(String),
            Number(f64),
        }

        match RawAmount::deserialize(deserializer)? {
            RawAmount::Text(text) => UsdPrice::parse(&text).ok_or_else(|| {
                serde::de::Error::custom(format!("invalid price amount '{}'", text))
            }),
            RawAmount::Number(amount) => Ok(UsdPrice::from_f64(amount)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_amounts() {
        assert_eq!(UsdPrice::parse("1.50"), Some(UsdPrice::from_cents(150)));
        assert_eq!(UsdPrice::parse("0.05"), Some(UsdPrice::from_cents(5)));
        assert_eq!(UsdPrice::parse("0.5"), Some(UsdPrice::from_cents(50)));
        assert_eq!(UsdPrice::parse("12"), Some(UsdPrice::from_cents(1200)));
        assert_eq!(UsdPrice::parse(".75"), Some(UsdPrice::from_cents(75)));
        assert_eq!(UsdPrice::parse(""), None);
        assert_eq!(UsdPrice::parse("1.505"), None);
        assert_eq!(UsdPrice::parse("-3.00"), None);
        assert_eq!(UsdPrice::parse("abc"), None);
    }

    #[test]
    fn test_display_keeps_two_decimals() {
        assert_eq!(UsdPrice::from_cents(150).to_string(), "1.50");
        assert_eq!(UsdPrice::from_cents(5).to_string(), "0.05");
        assert_eq!(UsdPrice::from_cents(700).to_string(), "7.00");
    }

    #[test]
    fn test_summation_has_no_drift() {
        // 0.10 added a thousand times is exactly 100.00
        let total: UsdPrice = (0..1000).map(|_| UsdPrice::from_cents(10)).sum();
        assert_eq!(total, UsdPrice::from_cents(10_000));
        assert_eq!(total.to_string(), "100.00");
    }

    #[test]
    fn test_times_quantity() {
        assert_eq!(
            UsdPrice::from_cents(150).times(2),
            UsdPrice::from_cents(300)
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let price = UsdPrice::from_cents(1295);
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"12.95\"");
        assert_eq!(serde_json::from_str::<UsdPrice>(&json).unwrap(), price);
    }

    #[test]
    fn test_deserialize_from_number() {
        let price: UsdPrice = serde_json::from_str("1.5").unwrap();
        assert_eq!(price, UsdPrice::from_cents(150));
    }
}
