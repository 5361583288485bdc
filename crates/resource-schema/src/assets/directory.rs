//! Assets unpacked into a directory on disk
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

use crate::assets::{AssetProvider, AssetStream, ResourceName};
use crate::loader::error::{LoaderError, LoaderResult};
use std::fs::File;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Provider that resolves names relative to a root directory
#[derive(Debug, Clone)]
pub struct DirectoryAssets {
    root: PathBuf,
}

impl DirectoryAssets {
    /// Create a provider rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Root directory of the bundle
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem path an asset name resolves to
    pub fn path_for(&self, name: &ResourceName) -> PathBuf {
        name.as_str()
            .split('/')
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    /// Walk `name` segment by segment to a regular file under the root
    ///
    /// Symlinks are never followed. A segment that is missing, a symlink, or
    /// a non-directory in the middle of the name means no asset has that
    /// name; any other metadata failure means the bundle is unreadable.
    fn resolve(&self, name: &ResourceName) -> LoaderResult<PathBuf> {
        let mut path = self.root.clone();
        let mut segments = name.as_str().split('/').peekable();

        while let Some(segment) = segments.next() {
            path.push(segment);
            let file_type = match std::fs::symlink_metadata(&path) {
                Ok(metadata) => metadata.file_type(),
                Err(e) if e.kind() == ErrorKind::NotFound => {
                    return Err(LoaderError::not_found(name.as_str()))
                }
                Err(e) => return Err(LoaderError::unreadable(name.as_str(), e)),
            };

            let expected = if segments.peek().is_some() {
                file_type.is_dir()
            } else {
                file_type.is_file()
            };
            if !expected {
                trace!(asset = %name, path = %path.display(), ?file_type, "Not a bundle entry");
                return Err(LoaderError::not_found(name.as_str()));
            }
        }

        Ok(path)
    }

    fn collect_names(&self, dir: &Path, prefix: &str, names: &mut Vec<String>) -> LoaderResult<()> {
        let entries = std::fs::read_dir(dir)
            .map_err(|e| LoaderError::unreadable(dir.display().to_string(), e))?;

        for entry in entries {
            let entry = entry.map_err(|e| LoaderError::unreadable(dir.display().to_string(), e))?;
            let file_name = entry.file_name().to_string_lossy().into_owned();
            let relative = if prefix.is_empty() {
                file_name
            } else {
                format!("{}/{}", prefix, file_name)
            };

            // Symlinks report their own type here and are skipped
            let file_type = entry
                .file_type()
                .map_err(|e| LoaderError::unreadable(relative.clone(), e))?;
            if file_type.is_dir() {
                self.collect_names(&entry.path(), &relative, names)?;
            } else if file_type.is_file() {
                names.push(relative);
            }
        }

        Ok(())
    }
}

impl AssetProvider for DirectoryAssets {
    fn open(&self, name: &ResourceName) -> LoaderResult<AssetStream> {
        let path = self.resolve(name)?;
        trace!(asset = %name, path = %path.display(), "Opening asset from directory");

        match File::open(&path) {
            Ok(file) => Ok(Box::new(file)),
            Err(e) if e.kind() == ErrorKind::NotFound => Err(LoaderError::not_found(name.as_str())),
            Err(e) => Err(LoaderError::unreadable(name.as_str(), e)),
        }
    }

    fn names(&self) -> LoaderResult<Vec<String>> {
        let mut names = Vec::new();
        self.collect_names(&self.root, "", &mut names)?;
        names.sort();
        Ok(names)
    }

    fn contains(&self, name: &ResourceName) -> LoaderResult<bool> {
        match self.resolve(name) {
            Ok(_) => Ok(true),
            Err(LoaderError::ResourceNotFound { .. }) => Ok(false),
            Err(e) => Err(e),
        }
    }
}
