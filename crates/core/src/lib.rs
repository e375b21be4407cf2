#![deny(unsafe_code)]
//! Core color pipeline for the palette service.
//!
//! Parses `#rrggbb` strings into channels (`hex`), derives chroma, hue,
//! saturation, value and luma (`color`), assembles the `ColorObject`
//! projection of a stored `ColorRecord` (`record`), and maps whole batches in
//! input order (`transform`). Ordering by an attribute is a separate,
//! explicit stage (`sort`).

pub mod color;
pub mod error;
pub mod hex;
pub mod record;
pub mod sort;
pub mod transform;

pub use color::{Extrema, Hsv, NormalizedRgb, Rgb8};
pub use error::{Channel, ColorError, MalformedHexError};
pub use hex::{parse_hex, to_hex};
pub use record::{ColorObject, ColorRecord};
pub use sort::{sort_objects, Order, SortKey};
#[cfg(feature = "parallel")]
pub use transform::par_transform_all;
pub use transform::{transform_all, transform_each};
