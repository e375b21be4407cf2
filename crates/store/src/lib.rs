#![deny(unsafe_code)]
//! File-backed document store of color records.
//!
//! The store file is a JSON array of `{"_id", "color", "name"}` documents.
//! It is read once by [`ColorStore::open`] and rewritten on every insert.
//! Queries are exact-match and return records in stored order.
//!
//! There is no file locking: two processes inserting at the same time each
//! rewrite the file from their own snapshot, and the last rename wins.

pub mod config;
pub mod error;
pub mod id;

pub use config::StoreConfig;
pub use error::StoreError;

use id::IdGenerator;
use palette_core::{parse_hex, ColorRecord};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Exact-match query over stored records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    All,
    ById(String),
    ByHex(String),
    ByName(String),
}

impl Filter {
    fn matches(&self, record: &ColorRecord) -> bool {
        match self {
            Filter::All => true,
            Filter::ById(id) => record.id == *id,
            Filter::ByHex(hex) => record.hex == *hex,
            Filter::ByName(name) => record.name == *name,
        }
    }
}

/// A color to insert; the store assigns its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewColor {
    pub hex: String,
    pub name: String,
}

/// Result of a successful insert.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InsertReceipt {
    pub inserted_id: String,
}

/// In-memory view of the store file.
#[derive(Debug)]
pub struct ColorStore {
    config: StoreConfig,
    records: Vec<ColorRecord>,
    ids: IdGenerator,
}

impl ColorStore {
    /// Loads the store file. A missing file is an empty store.
    ///
    /// Records are loaded as-is; a malformed hex value only surfaces as an
    /// error when the record is transformed.
    pub fn open(config: StoreConfig) -> Result<Self, StoreError> {
        Self::open_with_ids(config, IdGenerator::from_clock())
    }

    /// Like [`ColorStore::open`] with a caller-supplied id generator.
    pub fn open_with_ids(config: StoreConfig, ids: IdGenerator) -> Result<Self, StoreError> {
        let path = config.path();
        let records = match fs::read_to_string(path) {
            Ok(text) if text.trim().is_empty() => Vec::new(),
            Ok(text) => serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
                path: path.to_path_buf(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("store {} not found, starting empty", path.display());
                Vec::new()
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: path.to_path_buf(),
                    source,
                })
            }
        };
        log::debug!("opened store {} with {} records", path.display(), records.len());
        Ok(Self {
            config,
            records,
            ids,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// All stored records in stored order.
    pub fn records(&self) -> &[ColorRecord] {
        &self.records
    }

    /// Records matching `filter`, in stored order.
    pub fn find(&self, filter: &Filter) -> Vec<ColorRecord> {
        self.records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect()
    }

    /// Returns true if a record with exactly this hex value exists.
    pub fn contains_hex(&self, hex: &str) -> bool {
        self.records.iter().any(|r| r.hex == hex)
    }

    /// Validates, assigns an id, appends and persists a new color.
    ///
    /// Rejects an empty hex or name, a hex that is not `#rrggbb`, and a hex
    /// value that is already stored.
    pub fn insert(&mut self, color: NewColor) -> Result<InsertReceipt, StoreError> {
        if color.hex.is_empty() || color.name.is_empty() {
            return Err(StoreError::IncompleteColor);
        }
        parse_hex(&color.hex)?;
        if self.contains_hex(&color.hex) {
            return Err(StoreError::Duplicate(color.hex));
        }

        let id = self.ids.next_id();
        self.records
            .push(ColorRecord::new(id.clone(), color.hex, color.name));
        if let Err(e) = self.persist() {
            self.records.pop();
            return Err(e);
        }
        log::info!("inserted color {id} into {}", self.config.path().display());
        Ok(InsertReceipt { inserted_id: id })
    }

    /// Writes all records to a sibling temp file, then renames it over the
    /// store file. The temp file is removed if either step fails.
    fn persist(&self) -> Result<(), StoreError> {
        let path = self.config.path();
        let text = serde_json::to_string_pretty(&self.records)?;
        let tmp = temp_path(path);
        let written = fs::write(&tmp, text).and_then(|()| fs::rename(&tmp, path));
        if let Err(source) = written {
            if let Err(e) = fs::remove_file(&tmp) {
                if e.kind() != io::ErrorKind::NotFound {
                    log::warn!("could not remove {}: {e}", tmp.display());
                }
            }
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
        Ok(())
    }
}

/// Sibling of `path` with `.tmp` appended to the file name.
fn temp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}
