//! Stored color records and their derived projection.

use serde::{Deserialize, Serialize};

use crate::color::{derive_hsv, extrema, luma, normalize, Hsv, Rgb8};
use crate::error::MalformedHexError;
use crate::hex::parse_hex;

/// A color as it is stored: identity plus a `#rrggbb` string.
///
/// Uses the document field names `_id` and `color`; `id` and `hex` are
/// accepted on input as well. Missing fields load as empty strings, so an
/// incomplete document only fails once its hex value is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorRecord {
    #[serde(rename = "_id", alias = "id", default)]
    pub id: String,
    #[serde(rename = "color", alias = "hex", default)]
    pub hex: String,
    #[serde(default)]
    pub name: String,
}

impl ColorRecord {
    pub fn new(id: impl Into<String>, hex: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            hex: hex.into(),
            name: name.into(),
        }
    }
}

/// A record enriched with its channels and HSV/luma attributes.
///
/// Computed on demand and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorObject {
    pub id: String,
    pub name: String,
    pub hex: String,
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub chroma: f64,
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
    pub luma: f64,
}

impl ColorObject {
    /// Runs the full pipeline on one record.
    pub fn from_record(record: &ColorRecord) -> Result<Self, MalformedHexError> {
        let rgb = parse_hex(&record.hex)?;
        let normalized = normalize(rgb);
        let hsv = derive_hsv(normalized, extrema(normalized));
        Ok(Self::assemble(record, rgb, hsv, luma(normalized)))
    }

    /// Combines identity fields, copied verbatim, with already derived values.
    pub fn assemble(record: &ColorRecord, rgb: Rgb8, hsv: Hsv, luma: f64) -> Self {
        Self {
            id: record.id.clone(),
            name: record.name.clone(),
            hex: record.hex.clone(),
            red: rgb.red,
            green: rgb.green,
            blue: rgb.blue,
            chroma: hsv.chroma,
            hue: hsv.hue,
            saturation: hsv.saturation,
            value: hsv.value,
            luma,
        }
    }

    /// The parsed channels.
    pub fn rgb(&self) -> Rgb8 {
        Rgb8 {
            red: self.red,
            green: self.green,
            blue: self.blue,
        }
    }
}
