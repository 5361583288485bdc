//! Per-resource-type schema binding
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

use crate::assets::{AssetProvider, EmbeddedAssets, ResourceName};
use crate::document::SchemaDocument;
use crate::loader::{LoaderResult, SchemaDocumentLoader};

/// Schema configuration of one resource type
///
/// Each resource type owns exactly one schema asset. Concrete types build a
/// `Configuration` with their asset name instead of specializing a base type.
#[derive(Debug, Clone)]
pub struct Configuration<P = EmbeddedAssets> {
    loader: SchemaDocumentLoader<P>,
}

impl Configuration<EmbeddedAssets> {
    /// Configuration reading `name` from the bundled schemas
    pub fn new(name: ResourceName) -> Self {
        Self {
            loader: SchemaDocumentLoader::bundled(name),
        }
    }

    /// Configuration for a type name such as `My::Resource::Type`
    pub fn for_type_name(type_name: &str) -> LoaderResult<Self> {
        ResourceName::for_type_name(type_name).map(Self::new)
    }
}

impl<P: AssetProvider> Configuration<P> {
    /// Configuration reading `name` from a custom provider
    pub fn with_provider(name: ResourceName, provider: P) -> Self {
        Self {
            loader: SchemaDocumentLoader::new(name, provider),
        }
    }

    /// The schema asset this configuration is bound to
    pub fn resource_name(&self) -> &ResourceName {
        self.loader.resource_name()
    }

    /// Load and parse the resource schema
    pub fn load_document(&self) -> LoaderResult<SchemaDocument> {
        self.loader.load_document()
    }

    /// Same as [`load_document`](Self::load_document)
    pub fn resource_schema_json_object(&self) -> LoaderResult<SchemaDocument> {
        self.load_document()
    }

    /// The underlying loader
    pub fn loader(&self) -> &SchemaDocumentLoader<P> {
        &self.loader
    }
}
