//! Error types for the color store.

use palette_core::MalformedHexError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store file could not be read or written.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The store file exists but is not a JSON array of color documents.
    #[error("store file {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The records could not be serialized for writing.
    #[error("could not serialize store: {0}")]
    Serialization(#[from] serde_json::Error),

    /// An insert was missing its hex value or its name.
    #[error("incomplete color: both hex and name are required")]
    IncompleteColor,

    /// An insert carried a hex value that is not `#rrggbb`.
    #[error(transparent)]
    InvalidHex(#[from] MalformedHexError),

    /// A color with the same hex value is already stored.
    #[error("color already in store: {0}")]
    Duplicate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_includes_path_and_cause() {
        let err = StoreError::Io {
            path: PathBuf::from("/tmp/palette.json"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let msg = format!("{err}");
        assert!(msg.contains("/tmp/palette.json"), "missing path in: {msg}");
        assert!(msg.contains("denied"), "missing cause in: {msg}");
    }

    #[test]
    fn duplicate_includes_hex() {
        let msg = format!("{}", StoreError::Duplicate("#C0FFEE".into()));
        assert!(msg.contains("#C0FFEE"), "missing hex in: {msg}");
    }

    #[test]
    fn invalid_hex_is_transparent() {
        let err = StoreError::from(MalformedHexError::BadLength {
            input: "#FFF".into(),
            len: 4,
        });
        let msg = format!("{err}");
        assert!(msg.contains("#FFF"), "missing input in: {msg}");
    }

    #[test]
    fn store_error_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreError>();
    }
}
