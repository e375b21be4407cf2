//! Store configuration, built once at startup and handed to [`crate::ColorStore::open`].

use std::path::{Path, PathBuf};

/// Default store file, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "palette.json";

/// Location of the store file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    path: PathBuf,
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(DEFAULT_STORE_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_palette_json() {
        assert_eq!(StoreConfig::default().path(), Path::new("palette.json"));
    }

    #[test]
    fn new_keeps_given_path() {
        let config = StoreConfig::new("/var/lib/palette/colors.json");
        assert_eq!(config.path(), Path::new("/var/lib/palette/colors.json"));
    }
}
