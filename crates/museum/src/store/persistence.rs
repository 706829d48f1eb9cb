//! Persistence for the inventory store - save/load a single JSON file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use crate::error::{MuseumError, Result};

use super::document::StoreDocument;
use super::inventory::MuseumStore;

/// Conventional inventory file name.
pub const DEFAULT_STORE_FILE: &str = "museum_exhibits.json";

impl MuseumStore {
    /// Load a store from an inventory file.
    ///
    /// A missing file is a valid initial state and yields an empty store. A
    /// file that exists but cannot be read or parsed is a hard error - it is
    /// surfaced instead of silently discarding someone's inventory.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::new());
        }

        let file = File::open(path).map_err(|e| {
            MuseumError::Persistence(format!("Failed to open file '{}': {}", path.display(), e))
        })?;

        let reader = BufReader::new(file);
        let value: serde_json::Value = serde_json::from_reader(reader).map_err(|e| {
            MuseumError::Persistence(format!(
                "Failed to parse inventory file '{}': {}",
                path.display(),
                e
            ))
        })?;

        StoreDocument::decode(value)?.into_store()
    }

    /// Save the store to an inventory file in the envelope shape,
    /// pretty-printed. Parent directories are created if needed.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    MuseumError::Persistence(format!(
                        "Failed to create directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let file = File::create(path).map_err(|e| {
            MuseumError::Persistence(format!("Failed to create file '{}': {}", path.display(), e))
        })?;

        let writer = BufWriter::new(file);
        let document = StoreDocument::from_store(self);
        serde_json::to_writer_pretty(writer, &document).map_err(|e| {
            MuseumError::Persistence(format!("Failed to serialize inventory: {}", e))
        })?;

        Ok(())
    }
}
