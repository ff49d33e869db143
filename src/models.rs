//! Frontend Models
//!
//! Data structures matching the menu server's JSON.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Station name used for items the server left unassigned
pub const FALLBACK_STATION: &str = "Other";

/// A single dish. Identity is `name`; favorites are keyed by it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "non_empty_string")]
    pub station: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub dietary_flags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub nutrition: Nutrition,
}

impl MenuItem {
    /// Station group this item renders under
    pub fn station_or_fallback(&self) -> &str {
        self.station.as_deref().unwrap_or(FALLBACK_STATION)
    }

    pub fn has_flag(&self, flag: &str) -> bool {
        self.dietary_flags.iter().any(|f| f == flag)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    #[serde(default, deserialize_with = "lenient_number")]
    pub calories: Option<f64>,
}

/// One day's menu for a dining hall, keyed by meal period.
///
/// Periods keep the order the server sent them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuSnapshot {
    periods: Vec<(String, Vec<MenuItem>)>,
}

impl MenuSnapshot {
    pub fn from_periods(periods: Vec<(String, Vec<MenuItem>)>) -> Self {
        Self { periods }
    }

    pub fn periods(&self) -> impl Iterator<Item = (&str, &[MenuItem])> {
        self.periods
            .iter()
            .map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    pub fn period(&self, name: &str) -> Option<&[MenuItem]> {
        self.periods
            .iter()
            .find(|(period, _)| period == name)
            .map(|(_, items)| items.as_slice())
    }

    pub fn item_count(&self) -> usize {
        self.periods.iter().map(|(_, items)| items.len()).sum()
    }
}

impl<'de> Deserialize<'de> for MenuSnapshot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SnapshotVisitor;

        impl<'de> Visitor<'de> for SnapshotVisitor {
            type Value = MenuSnapshot;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of meal period to menu items")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<MenuSnapshot, A::Error> {
                let mut periods: Vec<(String, Vec<MenuItem>)> = Vec::new();
                while let Some((name, items)) = map.next_entry::<String, Vec<MenuItem>>()? {
                    // Later duplicate keys win, like a JSON object would.
                    match periods.iter_mut().find(|(period, _)| *period == name) {
                        Some(slot) => slot.1 = items,
                        None => periods.push((name, items)),
                    }
                }
                Ok(MenuSnapshot { periods })
            }
        }

        deserializer.deserialize_map(SnapshotVisitor)
    }
}

/// Favorite entry as returned by the favorites endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FavoriteDish {
    pub dish_name: String,
}

fn non_empty_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_default<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Nutrition, D::Error> {
    Ok(Option::<Nutrition>::deserialize(deserializer)?.unwrap_or_default())
}

/// Numbers may arrive as JSON numbers, numeric strings or ""
fn lenient_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<f64>, D::Error> {
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}
