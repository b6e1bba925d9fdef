//! Key-lookup store shim
//!
//! Serves records from a flat `{key: {fields...}}` JSON file by request
//! path. A path like `/NOSAD` resolves to the record stored under `NOSAD`
//! (with the key as its id); an unknown key returns `None` so the caller can
//! pass the request through to the next handler unmodified.

use std::path::Path;

use ahash::AHashMap;

use crate::domain::{Location, LocationDraft};
use crate::error::Result;

/// Flat key-to-record store loaded from a JSON file
#[derive(Debug, Clone)]
pub struct KeyedDb {
    records: AHashMap<String, LocationDraft>,
}

impl KeyedDb {
    /// Load the store from a flat JSON map file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        let records: AHashMap<String, LocationDraft> = serde_json::from_str(&raw)?;
        tracing::debug!(count = records.len(), "Loaded keyed store");
        Ok(Self { records })
    }

    /// Build from an in-memory map
    pub fn from_records(records: AHashMap<String, LocationDraft>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Resolve a request path (`/KEY` or `KEY`) to its record.
    ///
    /// `None` means the path did not match and the request should fall
    /// through to the next handler.
    pub fn lookup(&self, path: &str) -> Option<Location> {
        let key = path.strip_prefix('/').unwrap_or(path);
        self.records.get(key).map(|fields| Location {
            id: key.to_string(),
            name: fields.name.clone(),
            city: fields.city.clone(),
            country: fields.country.clone(),
            province: fields.province.clone(),
        })
    }
}
