//! Structured CLI errors with meaningful exit codes.
//!
//! Exit code scheme:
//! - 0:  success
//! - 2:  clap arg parse error (automatic, before our code runs)
//! - 10: color data error (a stored record has a malformed hex value)
//! - 11: I/O error (store file unreadable, unwritable or corrupt)
//! - 12: input error (rejected insert, bad arguments)
//! - 13: serialization error
//! - 14: no matching colors

use palette_core::ColorError;
use palette_store::StoreError;
use std::fmt;

/// Errors produced by CLI operations, each mapped to a distinct exit code.
#[derive(Debug)]
pub enum CliError {
    /// A stored record could not be transformed.
    Color(ColorError),
    /// The store file could not be read or written.
    Io(String),
    /// A user input error (incomplete, malformed or duplicate color).
    Input(String),
    /// A serialization error (JSON output failure).
    Serialization(String),
    /// A query matched nothing.
    NotFound(String),
}

impl CliError {
    /// Returns the process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Color(_) => 10,
            CliError::Io(_) => 11,
            CliError::Input(_) => 12,
            CliError::Serialization(_) => 13,
            CliError::NotFound(_) => 14,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Color(e) => write!(f, "{e}"),
            CliError::Io(msg) => write!(f, "{msg}"),
            CliError::Input(msg) => write!(f, "{msg}"),
            CliError::Serialization(msg) => write!(f, "{msg}"),
            CliError::NotFound(what) => write!(f, "not found: {what}"),
        }
    }
}

impl From<ColorError> for CliError {
    fn from(e: ColorError) -> Self {
        CliError::Color(e)
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Io { .. } | StoreError::Corrupt { .. } => CliError::Io(e.to_string()),
            StoreError::Serialization(_) => CliError::Serialization(e.to_string()),
            StoreError::IncompleteColor | StoreError::InvalidHex(_) | StoreError::Duplicate(_) => {
                CliError::Input(e.to_string())
            }
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Serialization(e.to_string())
    }
}
