//! Explicit ordering stage over already transformed color objects.
//!
//! The batch transform never reorders; callers that want a palette ordered by
//! hue, brightness or name apply [`sort_objects`] afterwards.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::record::ColorObject;

/// Attribute to order color objects by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Hue,
    Saturation,
    Value,
    Chroma,
    Luma,
    Name,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    #[default]
    Ascending,
    Descending,
}

/// All sort key names accepted by [`SortKey::from_str`].
const SORT_KEY_NAMES: &[&str] = &["hue", "saturation", "value", "chroma", "luma", "name"];

impl SortKey {
    /// Returns a slice of all recognized sort key names.
    pub fn list_names() -> &'static [&'static str] {
        SORT_KEY_NAMES
    }

    fn compare(self, a: &ColorObject, b: &ColorObject) -> Ordering {
        match self {
            SortKey::Hue => a.hue.total_cmp(&b.hue),
            SortKey::Saturation => a.saturation.total_cmp(&b.saturation),
            SortKey::Value => a.value.total_cmp(&b.value),
            SortKey::Chroma => a.chroma.total_cmp(&b.chroma),
            SortKey::Luma => a.luma.total_cmp(&b.luma),
            SortKey::Name => a.name.cmp(&b.name),
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hue" => Ok(SortKey::Hue),
            "saturation" | "sat" => Ok(SortKey::Saturation),
            "value" | "val" => Ok(SortKey::Value),
            "chroma" => Ok(SortKey::Chroma),
            "luma" => Ok(SortKey::Luma),
            "name" => Ok(SortKey::Name),
            _ => Err(format!(
                "unknown sort key '{s}' (expected one of: {})",
                SORT_KEY_NAMES.join(", ")
            )),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortKey::Hue => "hue",
            SortKey::Saturation => "saturation",
            SortKey::Value => "value",
            SortKey::Chroma => "chroma",
            SortKey::Luma => "luma",
            SortKey::Name => "name",
        };
        f.write_str(name)
    }
}

/// Stable in-place sort. Objects with equal keys keep their relative order
/// in both directions.
pub fn sort_objects(objects: &mut [ColorObject], key: SortKey, order: Order) {
    objects.sort_by(|a, b| match order {
        Order::Ascending => key.compare(a, b),
        Order::Descending => key.compare(b, a),
    });
}
