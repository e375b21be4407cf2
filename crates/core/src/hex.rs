//! Parsing and encoding of `#rrggbb` hex color strings.

use crate::color::Rgb8;
use crate::error::{Channel, MalformedHexError};

/// Parses a hex color string like `"#ff00aa"` (case insensitive) into 8-bit channels.
///
/// The string must be exactly seven characters with a leading `#`. Each channel
/// is parsed on its own and checked in red, green, blue order, so the error
/// always names the first channel that failed.
pub fn parse_hex(input: &str) -> Result<Rgb8, MalformedHexError> {
    if !input.starts_with('#') {
        return Err(MalformedHexError::MissingMarker {
            input: input.to_owned(),
        });
    }
    if input.len() != 7 {
        return Err(MalformedHexError::BadLength {
            input: input.to_owned(),
            len: input.len(),
        });
    }

    let red = parse_channel(input, Channel::Red);
    let green = parse_channel(input, Channel::Green);
    let blue = parse_channel(input, Channel::Blue);

    Ok(Rgb8 {
        red: red?,
        green: green?,
        blue: blue?,
    })
}

/// Parses the two digits of one channel.
///
/// Only ASCII hex digits are accepted; `u8::from_str_radix` alone would also
/// take a leading `+`.
fn parse_channel(input: &str, channel: Channel) -> Result<u8, MalformedHexError> {
    let bytes = &input.as_bytes()[channel.span()];
    let bad_channel = || MalformedHexError::BadChannel {
        input: input.to_owned(),
        channel,
        digits: String::from_utf8_lossy(bytes).into_owned(),
    };

    if !bytes.iter().all(u8::is_ascii_hexdigit) {
        return Err(bad_channel());
    }
    let digits = std::str::from_utf8(bytes).map_err(|_| bad_channel())?;
    u8::from_str_radix(digits, 16).map_err(|_| bad_channel())
}

/// Encodes channels as an uppercase `"#RRGGBB"` string.
pub fn to_hex(rgb: Rgb8) -> String {
    format!("#{:02X}{:02X}{:02X}", rgb.red, rgb.green, rgb.blue)
}
