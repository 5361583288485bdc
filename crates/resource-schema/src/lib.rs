//! Resource Schema - bundled JSON schema loading for resource providers
//!
//! A resource provider ships the JSON schema of each resource type it
//! manages as a read-only asset. This crate locates such an asset by name
//! and parses it into a [`SchemaDocument`] that handlers and validators can
//! query.
//!
//! ## Components
//!
//! - **Assets**: [`AssetProvider`] opens a byte stream for a [`ResourceName`].
//!   [`EmbeddedAssets`] serves schemas compiled into the binary and
//!   [`DirectoryAssets`] serves an unpacked bundle on disk.
//! - **Loader**: [`SchemaDocumentLoader`] is bound to one asset name and
//!   parses it on every call.
//! - **Configuration**: [`Configuration`] ties a resource type to its schema.
//!
//! ## Quick Start
//!
//! ```rust
//! use resource_schema::Configuration;
//!
//! let config = Configuration::for_type_name("My::Resource::Type").unwrap();
//! let schema = config.load_document().unwrap();
//!
//! assert_eq!(schema.type_name(), Some("My::Resource::Type"));
//! assert_eq!(
//!     schema.pointer("/properties/Id/type").and_then(|v| v.as_str()),
//!     Some("string")
//! );
//! ```
//!
//! ## Errors
//!
//! Loading fails with [`LoaderError::ResourceNotFound`],
//! [`LoaderError::ResourceUnreadable`] or [`LoaderError::MalformedSchema`].
//! None of them is retried or papered over; callers should treat them as a
//! broken provider bundle.
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

pub mod assets;
pub mod configuration;
pub mod document;
pub mod loader;

// Re-export commonly used types for convenience
pub use assets::{AssetProvider, AssetStream, DirectoryAssets, EmbeddedAssets, ResourceName};
pub use configuration::Configuration;
pub use document::SchemaDocument;
pub use loader::{LoaderError, LoaderResult, SchemaDocumentLoader, SchemaParser};
