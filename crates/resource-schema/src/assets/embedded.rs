//! Assets compiled into the binary
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

use crate::assets::{AssetProvider, AssetStream, ResourceName};
use crate::loader::error::{LoaderError, LoaderResult};
use std::io::Cursor;

/// A static `(name, content)` table
pub type AssetTable = &'static [(&'static str, &'static [u8])];

/// Schemas shipped with this crate
const BUNDLED: AssetTable = &[
    (
        "my-resource-type.json",
        include_bytes!("../../schemas/my-resource-type.json"),
    ),
    (
        "example-storage-bucket.json",
        include_bytes!("../../schemas/example-storage-bucket.json"),
    ),
];

/// Provider backed by a static table of embedded assets
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAssets {
    entries: AssetTable,
}

impl EmbeddedAssets {
    /// The schemas bundled with this crate at build time
    pub fn bundled() -> Self {
        Self { entries: BUNDLED }
    }

    /// Wrap a custom table, e.g. one built from `include_bytes!` elsewhere
    pub fn from_static(entries: AssetTable) -> Self {
        Self { entries }
    }

    /// Raw bytes of an asset without going through a stream
    pub fn get(&self, name: &str) -> Option<&'static [u8]> {
        self.entries
            .iter()
            .find(|(entry, _)| *entry == name)
            .map(|(_, bytes)| *bytes)
    }

    /// Number of assets in the table
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for EmbeddedAssets {
    fn default() -> Self {
        Self::bundled()
    }
}

impl AssetProvider for EmbeddedAssets {
    fn open(&self, name: &ResourceName) -> LoaderResult<AssetStream> {
        let bytes = self
            .get(name.as_str())
            .ok_or_else(|| LoaderError::not_found(name.as_str()))?;
        Ok(Box::new(Cursor::new(bytes)))
    }

    fn names(&self) -> LoaderResult<Vec<String>> {
        let mut names: Vec<String> = self
            .entries
            .iter()
            .map(|(name, _)| name.to_string())
            .collect();
        names.sort();
        Ok(names)
    }

    fn contains(&self, name: &ResourceName) -> LoaderResult<bool> {
        Ok(self.get(name.as_str()).is_some())
    }
}
