//! Channel types and the HSV/luma derivation.
//!
//! All derivations are pure functions over normalized channels in [0, 1].
//! Uses `f64` throughout.

use serde::{Deserialize, Serialize};

/// Three 8-bit color channels as parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb8 {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// Channels scaled to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalizedRgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Minimum and maximum across the three normalized channels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extrema {
    pub min: f64,
    pub max: f64,
}

/// Hue, saturation and value plus the chroma they are derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub chroma: f64,
    /// Degrees in [0, 360).
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

/// Divides each channel by 255.
pub fn normalize(rgb: Rgb8) -> NormalizedRgb {
    NormalizedRgb {
        r: f64::from(rgb.red) / 255.0,
        g: f64::from(rgb.green) / 255.0,
        b: f64::from(rgb.blue) / 255.0,
    }
}

/// Folds the channels directly into their min and max.
pub fn extrema(c: NormalizedRgb) -> Extrema {
    Extrema {
        min: c.r.min(c.g).min(c.b),
        max: c.r.max(c.g).max(c.b),
    }
}

/// Derives chroma, hue, saturation and value.
///
/// When two channels share the maximum, red wins over green and green over
/// blue. Achromatic colors (saturation 0) get hue 0.
pub fn derive_hsv(c: NormalizedRgb, ext: Extrema) -> Hsv {
    let Extrema { min, max } = ext;
    let chroma = max - min;
    let value = max;
    let saturation = if value == 0.0 { 0.0 } else { chroma / value };

    let hue = if saturation == 0.0 {
        0.0
    } else if c.r == max {
        let h = 60.0 * (((c.g - min) - (c.b - min)) / chroma);
        if h < 0.0 {
            h + 360.0
        } else {
            h
        }
    } else if c.g == max {
        120.0 + 60.0 * (((c.b - min) - (c.r - min)) / chroma)
    } else {
        // b == max: the only remaining possibility
        240.0 + 60.0 * (((c.r - min) - (c.g - min)) / chroma)
    };

    Hsv {
        chroma,
        hue,
        saturation,
        value,
    }
}

/// Fixed-weight brightness, `0.3 r + 0.59 g + 0.11 b`, without gamma correction.
///
/// Carries f64 rounding from the weights: white comes out as
/// `0.9999999999999999`, not exactly `1.0`. Compare with a tolerance.
pub fn luma(c: NormalizedRgb) -> f64 {
    0.3 * c.r + 0.59 * c.g + 0.11 * c.b
}
