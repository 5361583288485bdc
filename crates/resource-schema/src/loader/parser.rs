//! Decoding and parsing of raw asset bytes
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

use crate::assets::{AssetStream, ResourceName};
use crate::document::SchemaDocument;
use crate::loader::error::{LoaderError, LoaderResult};
use std::io::Read;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Parser turning asset bytes into a [`SchemaDocument`]
#[derive(Debug, Default, Clone, Copy)]
pub struct SchemaParser;

impl SchemaParser {
    /// Create a new schema parser
    pub fn new() -> Self {
        Self
    }

    /// Drain a stream into memory
    ///
    /// The stream is consumed and dropped before this returns.
    pub fn read_stream(&self, name: &ResourceName, mut stream: AssetStream) -> LoaderResult<Vec<u8>> {
        let mut bytes = Vec::new();
        stream
            .read_to_end(&mut bytes)
            .map_err(|e| LoaderError::unreadable(name.as_str(), e))?;
        Ok(bytes)
    }

    /// Decode UTF-8 and parse JSON
    pub fn parse_bytes(&self, name: &ResourceName, bytes: &[u8]) -> LoaderResult<SchemaDocument> {
        let content = std::str::from_utf8(bytes).map_err(|e| {
            let (line, column) = line_and_column(&bytes[..e.valid_up_to()]);
            LoaderError::malformed(name.as_str(), line, column, format!("invalid UTF-8: {}", e))
        })?;

        self.parse_str(name, content)
    }

    /// Parse JSON text, skipping a leading byte order mark
    ///
    /// Positions in errors count the mark's bytes, matching the columns
    /// reported for invalid UTF-8.
    pub fn parse_str(&self, name: &ResourceName, content: &str) -> LoaderResult<SchemaDocument> {
        let (content, offset) = match content.strip_prefix(BYTE_ORDER_MARK) {
            Some(rest) => (rest, BYTE_ORDER_MARK.len_utf8()),
            None => (content, 0),
        };

        SchemaDocument::from_json_str(content).map_err(|e| {
            let mut error = LoaderError::from_json(name.as_str(), &e);
            if let LoaderError::MalformedSchema { line: 1, column, .. } = &mut error {
                *column += offset;
            }
            error
        })
    }
}

/// 1-based position just past `prefix`
fn line_and_column(prefix: &[u8]) -> (usize, usize) {
    let line = prefix.iter().filter(|&&b| b == b'\n').count() + 1;
    let column = match prefix.iter().rposition(|&b| b == b'\n') {
        Some(newline) => prefix.len() - newline,
        None => prefix.len() + 1,
    };
    (line, column)
}
