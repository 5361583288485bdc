//! Validated identifiers for bundled assets
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

use crate::loader::error::{LoaderError, LoaderResult};
use std::fmt;
use std::str::FromStr;

/// Extension of every schema asset derived from a type name
const SCHEMA_EXTENSION: &str = "json";

/// Relative, `/`-separated name of a bundled asset
///
/// Immutable once built. Names never start with `/`, never contain `\`,
/// and never contain empty, `.` or `..` segments, so a name cannot
/// address anything outside the bundle it is resolved against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validate and wrap an asset name
    pub fn new(name: impl Into<String>) -> LoaderResult<Self> {
        let name = name.into();

        if name.is_empty() {
            return Err(LoaderError::invalid_name(name, "name cannot be empty"));
        }
        if name.contains('\\') {
            return Err(LoaderError::invalid_name(
                name,
                "use '/' as the segment separator",
            ));
        }
        if name.starts_with('/') {
            return Err(LoaderError::invalid_name(
                name,
                "name must be relative to the bundle",
            ));
        }
        if name
            .split('/')
            .any(|segment| segment.is_empty() || segment == "." || segment == "..")
        {
            return Err(LoaderError::invalid_name(
                name,
                "name contains an empty, '.' or '..' segment",
            ));
        }

        Ok(Self(name))
    }

    /// Derive the conventional schema asset name for a resource type
    ///
    /// `My::Resource::Type` becomes `my-resource-type.json`.
    pub fn for_type_name(type_name: &str) -> LoaderResult<Self> {
        let segments: Vec<&str> = type_name.split("::").collect();
        if segments.iter().any(|s| s.trim().is_empty()) {
            return Err(LoaderError::invalid_name(
                type_name,
                "type name must look like 'Organization::Service::Resource'",
            ));
        }

        let stem = segments.join("-").to_lowercase();
        Self::new(format!("{}.{}", stem, SCHEMA_EXTENSION))
    }

    /// Borrow the name as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Final segment of the name
    pub fn file_name(&self) -> &str {
        self.0.rsplit('/').next().unwrap_or(&self.0)
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ResourceName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ResourceName {
    type Err = LoaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for ResourceName {
    type Error = LoaderError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for ResourceName {
    type Error = LoaderError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_relative_names() {
        let name = ResourceName::new("my-resource-type.json").unwrap();
        assert_eq!(name.as_str(), "my-resource-type.json");
        assert_eq!(name.file_name(), "my-resource-type.json");

        let nested: ResourceName = "schemas/v1/bucket.json".parse().unwrap();
        assert_eq!(nested.file_name(), "bucket.json");
        assert_eq!(nested.to_string(), "schemas/v1/bucket.json");
    }

    #[test]
    fn test_rejects_escaping_names() {
        for bad in ["", "/etc/passwd", "../secret.json", "a//b.json", "a/./b.json", "a\\b.json"] {
            let err = ResourceName::new(bad).unwrap_err();
            assert!(
                matches!(err, LoaderError::InvalidResourceName { .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_name_from_type_name() {
        let name = ResourceName::for_type_name("My::Resource::Type").unwrap();
        assert_eq!(name.as_str(), "my-resource-type.json");

        assert!(ResourceName::for_type_name("").is_err());
        assert!(ResourceName::for_type_name("My::::Type").is_err());
    }
}
