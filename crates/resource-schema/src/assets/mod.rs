//! Access to the assets packaged with a resource provider
//!
//! A provider ships its schema files as read-only assets. The loader never
//! touches them directly; it asks an [`AssetProvider`] to open a byte stream
//! for a [`ResourceName`]. Two providers are included:
//!
//! - [`EmbeddedAssets`]: assets compiled into the binary
//! - [`DirectoryAssets`]: assets unpacked into a directory on disk
//!
//! Tests and embedders can supply their own implementation to simulate
//! missing or corrupted assets.
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

pub mod directory;
pub mod embedded;
pub mod name;

pub use directory::DirectoryAssets;
pub use embedded::EmbeddedAssets;
pub use name::ResourceName;

use crate::loader::error::LoaderResult;
use std::io::Read;
use std::sync::Arc;

/// Readable handle positioned at the first byte of an asset
///
/// The handle is released when dropped.
pub type AssetStream = Box<dyn Read + Send>;

/// Source of bundled, read-only assets
pub trait AssetProvider: Send + Sync {
    /// Open the asset called `name`
    ///
    /// Fails with `ResourceNotFound` when no asset has that name and with
    /// `ResourceUnreadable` when it exists but cannot be opened.
    fn open(&self, name: &ResourceName) -> LoaderResult<AssetStream>;

    /// Names of every asset this provider can open, sorted
    fn names(&self) -> LoaderResult<Vec<String>>;

    /// Whether an asset called `name` exists
    fn contains(&self, name: &ResourceName) -> LoaderResult<bool> {
        Ok(self.names()?.iter().any(|n| n == name.as_str()))
    }
}

impl<P: AssetProvider + ?Sized> AssetProvider for Arc<P> {
    fn open(&self, name: &ResourceName) -> LoaderResult<AssetStream> {
        (**self).open(name)
    }

    fn names(&self) -> LoaderResult<Vec<String>> {
        (**self).names()
    }

    fn contains(&self, name: &ResourceName) -> LoaderResult<bool> {
        (**self).contains(name)
    }
}

impl<P: AssetProvider + ?Sized> AssetProvider for Box<P> {
    fn open(&self, name: &ResourceName) -> LoaderResult<AssetStream> {
        (**self).open(name)
    }

    fn names(&self) -> LoaderResult<Vec<String>> {
        (**self).names()
    }

    fn contains(&self, name: &ResourceName) -> LoaderResult<bool> {
        (**self).contains(name)
    }
}
