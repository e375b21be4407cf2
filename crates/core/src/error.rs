//! Error types for the palette core.

use std::fmt;
use thiserror::Error;

/// One of the three 8-bit channels of a hex color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Byte range of this channel's two digits within `#rrggbb`.
    pub fn span(self) -> std::ops::Range<usize> {
        match self {
            Channel::Red => 1..3,
            Channel::Green => 3..5,
            Channel::Blue => 5..7,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// A hex color string that is not of the form `#rrggbb`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedHexError {
    /// The string does not start with `#`.
    #[error("malformed hex color {input:?}: missing leading '#'")]
    MissingMarker { input: String },

    /// The string is not exactly seven bytes long.
    #[error("malformed hex color {input:?}: expected 7 characters, got {len}")]
    BadLength { input: String, len: usize },

    /// A channel's two characters are not both hexadecimal digits.
    #[error("malformed hex color {input:?}: invalid {channel} channel {digits:?}")]
    BadChannel {
        input: String,
        channel: Channel,
        digits: String,
    },
}

impl MalformedHexError {
    /// The full string that failed to parse.
    pub fn input(&self) -> &str {
        match self {
            MalformedHexError::MissingMarker { input }
            | MalformedHexError::BadLength { input, .. }
            | MalformedHexError::BadChannel { input, .. } => input,
        }
    }

    /// The channel that failed, if the failure was inside a channel.
    pub fn channel(&self) -> Option<Channel> {
        match self {
            MalformedHexError::BadChannel { channel, .. } => Some(*channel),
            _ => None,
        }
    }
}

/// Errors produced by the color pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A single hex string failed to parse.
    #[error(transparent)]
    MalformedHex(#[from] MalformedHexError),

    /// A record inside a batch failed to parse.
    #[error("record {index} (id {id:?}): {source}")]
    InvalidRecord {
        index: usize,
        id: String,
        #[source]
        source: MalformedHexError,
    },
}

impl ColorError {
    /// The underlying hex failure, whichever variant carries it.
    pub fn malformed_hex(&self) -> &MalformedHexError {
        match self {
            ColorError::MalformedHex(e) => e,
            ColorError::InvalidRecord { source, .. } => source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_spans_cover_digits_after_marker() {
        assert_eq!(Channel::Red.span(), 1..3);
        assert_eq!(Channel::Green.span(), 3..5);
        assert_eq!(Channel::Blue.span(), 5..7);
    }

    #[test]
    fn missing_marker_mentions_input() {
        let err = MalformedHexError::MissingMarker {
            input: "ff0000".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("ff0000"), "missing input in: {msg}");
        assert!(msg.contains('#'), "missing marker hint in: {msg}");
        assert_eq!(err.channel(), None);
    }

    #[test]
    fn bad_length_includes_length() {
        let err = MalformedHexError::BadLength {
            input: "#FFF".into(),
            len: 4,
        };
        let msg = format!("{err}");
        assert!(msg.contains("#FFF"), "missing input in: {msg}");
        assert!(msg.contains('4'), "missing length in: {msg}");
    }

    #[test]
    fn bad_channel_names_channel_and_digits() {
        let err = MalformedHexError::BadChannel {
            input: "#00ZZ00".into(),
            channel: Channel::Green,
            digits: "ZZ".into(),
        };
        let msg = format!("{err}");
        assert!(msg.contains("green"), "missing channel in: {msg}");
        assert!(msg.contains("ZZ"), "missing digits in: {msg}");
        assert_eq!(err.channel(), Some(Channel::Green));
        assert_eq!(err.input(), "#00ZZ00");
    }

    #[test]
    fn invalid_record_includes_index_and_id() {
        let err = ColorError::InvalidRecord {
            index: 3,
            id: "abc".into(),
            source: MalformedHexError::MissingMarker {
                input: "nope".into(),
            },
        };
        let msg = format!("{err}");
        assert!(msg.contains('3'), "missing index in: {msg}");
        assert!(msg.contains("abc"), "missing id in: {msg}");
        assert!(msg.contains("nope"), "missing input in: {msg}");
        assert_eq!(err.malformed_hex().input(), "nope");
    }

    #[test]
    fn malformed_hex_converts_into_color_error() {
        let err: ColorError = MalformedHexError::BadLength {
            input: String::new(),
            len: 0,
        }
        .into();
        assert!(matches!(err, ColorError::MalformedHex(_)));
    }

    #[test]
    fn color_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ColorError>();
    }

    #[test]
    fn color_error_implements_std_error() {
        fn assert_std_error<T: std::error::Error>() {}
        assert_std_error::<ColorError>();
        assert_std_error::<MalformedHexError>();
    }
}
