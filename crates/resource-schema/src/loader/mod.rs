//! Schema loading and parsing functionality
//!
//! This module turns a named asset into a [`SchemaDocument`](crate::SchemaDocument):
//! - Scoped stream acquisition through an [`AssetProvider`](crate::AssetProvider)
//! - Strict UTF-8 decoding (a leading byte order mark is skipped)
//! - JSON parsing with line/column diagnostics
//!
//! # Example Usage
//!
//! ```rust
//! use resource_schema::{ResourceName, SchemaDocumentLoader};
//!
//! let loader = SchemaDocumentLoader::bundled(ResourceName::new("my-resource-type.json")?);
//! let schema = loader.load_document()?;
//! println!("Loaded schema: {}", schema.to_json_string_pretty()?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

pub mod error;
pub mod parser;
pub mod schema_loader;

pub use error::{LoaderError, LoaderResult};
pub use parser::SchemaParser;
pub use schema_loader::SchemaDocumentLoader;
