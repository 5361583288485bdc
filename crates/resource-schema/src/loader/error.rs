//! Error types for schema loading operations
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

use thiserror::Error;

/// Result type for loader operations
pub type LoaderResult<T> = Result<T, LoaderError>;

/// Error types for locating and parsing a bundled schema
#[derive(Error, Debug)]
pub enum LoaderError {
    /// No bundled asset matches the name
    #[error("Resource '{name}' was not found in the provider bundle")]
    ResourceNotFound { name: String },

    /// The asset exists but could not be opened or read
    #[error("Resource '{name}' could not be read: {source}")]
    ResourceUnreadable {
        name: String,
        source: std::io::Error,
    },

    /// The asset content is not a valid JSON document
    #[error("Malformed schema '{name}' at line {line}, column {column}: {reason}")]
    MalformedSchema {
        name: String,
        line: usize,
        column: usize,
        reason: String,
    },

    /// The name cannot identify a bundled asset
    #[error("Invalid resource name '{name}': {reason}")]
    InvalidResourceName { name: String, reason: String },
}

impl LoaderError {
    /// Create a not-found error
    pub fn not_found(name: impl Into<String>) -> Self {
        Self::ResourceNotFound { name: name.into() }
    }

    /// Create an unreadable-asset error with the underlying I/O cause
    pub fn unreadable(name: impl Into<String>, source: std::io::Error) -> Self {
        Self::ResourceUnreadable {
            name: name.into(),
            source,
        }
    }

    /// Create a malformed-schema error at a 1-based line and column
    pub fn malformed(
        name: impl Into<String>,
        line: usize,
        column: usize,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedSchema {
            name: name.into(),
            line,
            column,
            reason: reason.into(),
        }
    }

    /// Wrap a `serde_json` parse failure, keeping its position
    pub fn from_json(name: impl Into<String>, error: &serde_json::Error) -> Self {
        let message = error.to_string();
        let suffix = format!(" at line {} column {}", error.line(), error.column());
        let reason = message.strip_suffix(&suffix).unwrap_or(&message);
        Self::malformed(name, error.line(), error.column(), reason)
    }

    /// Create an invalid-name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidResourceName {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Get the resource name associated with this error
    pub fn resource_name(&self) -> &str {
        match self {
            Self::ResourceNotFound { name }
            | Self::ResourceUnreadable { name, .. }
            | Self::MalformedSchema { name, .. }
            | Self::InvalidResourceName { name, .. } => name,
        }
    }

    /// Position of a parse failure as `(line, column)`, if any
    pub fn position(&self) -> Option<(usize, usize)> {
        match self {
            Self::MalformedSchema { line, column, .. } => Some((*line, *column)),
            _ => None,
        }
    }

    /// True when the bundle itself is broken (missing or unreadable asset)
    pub fn is_bundle_defect(&self) -> bool {
        matches!(
            self,
            Self::ResourceNotFound { .. } | Self::ResourceUnreadable { .. }
        )
    }

    /// Check if this is a recoverable error
    ///
    /// Nothing at this layer is: there is no fallback schema and a retry
    /// reads the same immutable asset.
    pub fn is_recoverable(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let not_found = LoaderError::not_found("missing.json");
        assert!(matches!(not_found, LoaderError::ResourceNotFound { .. }));
        assert_eq!(not_found.resource_name(), "missing.json");
        assert!(not_found.is_bundle_defect());
        assert_eq!(not_found.position(), None);

        let unreadable = LoaderError::unreadable(
            "broken.json",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(unreadable.is_bundle_defect());
        assert!(unreadable.to_string().contains("broken.json"));
    }

    #[test]
    fn test_json_error_keeps_position() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{\n  \"a\": }").unwrap_err();
        let err = LoaderError::from_json("schema.json", &parse_err);

        assert_eq!(err.position(), Some((2, 8)));
        assert!(!err.is_bundle_defect());
        let rendered = err.to_string();
        assert!(rendered.starts_with("Malformed schema 'schema.json' at line 2, column 8"));
        assert_eq!(rendered.matches("line 2").count(), 1);
    }

    #[test]
    fn test_error_recovery() {
        assert!(!LoaderError::not_found("a.json").is_recoverable());
        assert!(!LoaderError::malformed("a.json", 1, 1, "eof").is_recoverable());
    }
}
