//! Loader bound to a single schema asset
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

use crate::assets::{AssetProvider, EmbeddedAssets, ResourceName};
use crate::document::SchemaDocument;
use crate::loader::{error::LoaderResult, parser::SchemaParser};
use tracing::{debug, instrument, warn};

/// Loads and parses the schema asset it was built for
///
/// The name is fixed at construction. Every call to
/// [`load_document`](Self::load_document) re-opens and re-parses the asset
/// and hands back a fresh document; nothing is cached.
#[derive(Debug, Clone)]
pub struct SchemaDocumentLoader<P = EmbeddedAssets> {
    name: ResourceName,
    provider: P,
    parser: SchemaParser,
}

impl SchemaDocumentLoader<EmbeddedAssets> {
    /// Loader over the schemas compiled into this crate
    pub fn bundled(name: ResourceName) -> Self {
        Self::new(name, EmbeddedAssets::bundled())
    }
}

impl<P: AssetProvider> SchemaDocumentLoader<P> {
    /// Create a loader for `name` backed by `provider`
    pub fn new(name: ResourceName, provider: P) -> Self {
        Self {
            name,
            provider,
            parser: SchemaParser::new(),
        }
    }

    /// The asset this loader reads
    pub fn resource_name(&self) -> &ResourceName {
        &self.name
    }

    /// The provider assets are opened from
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Open, read and parse the asset
    #[instrument(level = "debug", skip(self), fields(asset = %self.name))]
    pub fn load_document(&self) -> LoaderResult<SchemaDocument> {
        let result = self.read_and_parse();
        if let Err(e) = &result {
            warn!(asset = %self.name, error = %e, "Failed to load schema document");
        }
        result
    }

    fn read_and_parse(&self) -> LoaderResult<SchemaDocument> {
        let stream = self.provider.open(&self.name)?;
        let bytes = self.parser.read_stream(&self.name, stream)?;
        debug!(bytes = bytes.len(), "Read schema asset");

        let document = self.parser.parse_bytes(&self.name, &bytes)?;
        debug!(type_name = document.type_name(), "Parsed schema document");
        Ok(document)
    }
}
