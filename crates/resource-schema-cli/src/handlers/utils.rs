//! Shared utilities for command handlers

use crate::config::Config;
use crate::error::{Error, Result};
use resource_schema::{AssetProvider, DirectoryAssets, EmbeddedAssets, ResourceName};
use std::sync::Arc;
use tracing::debug;

/// Provider handle shared between concurrent loads
pub type SharedProvider = Arc<dyn AssetProvider>;

/// Select the asset provider: an unpacked bundle if configured, else the built-in one
pub fn asset_provider(config: &Config) -> Result<SharedProvider> {
    match &config.assets_dir {
        Some(dir) => {
            if !dir.is_dir() {
                return Err(Error::config(format!(
                    "assets directory '{}' does not exist",
                    dir.display()
                )));
            }
            debug!(dir = %dir.display(), "Using unpacked asset bundle");
            Ok(Arc::new(DirectoryAssets::new(dir)))
        }
        None => {
            debug!("Using built-in asset bundle");
            Ok(Arc::new(EmbeddedAssets::bundled()))
        }
    }
}

/// Turn a command-line NAME into an asset name
pub fn resolve_name(name: &str, is_type_name: bool) -> Result<ResourceName> {
    let resolved = if is_type_name {
        ResourceName::for_type_name(name)?
    } else {
        ResourceName::new(name)?
    };
    Ok(resolved)
}
