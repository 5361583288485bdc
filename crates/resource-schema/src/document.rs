//! In-memory JSON schema document
//!
//! Copyright (c) 2025 Resource Schema Team
//! Licensed under the Apache-2.0 license

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Parsed schema content
///
/// A plain JSON tree: objects, arrays and scalars. Equality is structural,
/// so key order in objects does not matter. Each load produces a fresh,
/// caller-owned value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SchemaDocument(Value);

impl SchemaDocument {
    /// Wrap an already parsed value
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Parse a JSON string
    pub fn from_json_str(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content).map(Self)
    }

    /// Top-level member `key`, if the root is an object
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Look up a node by JSON Pointer, e.g. `/properties/Id/type`
    pub fn pointer(&self, pointer: &str) -> Option<&Value> {
        self.0.pointer(pointer)
    }

    /// Root object, if the document is one
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    /// The `typeName` declared by a resource schema
    pub fn type_name(&self) -> Option<&str> {
        self.get("typeName").and_then(Value::as_str)
    }

    /// The `description` of the schema
    pub fn description(&self) -> Option<&str> {
        self.get("description").and_then(Value::as_str)
    }

    /// Names declared under `properties`
    pub fn properties(&self) -> impl Iterator<Item = &str> {
        self.get("properties")
            .and_then(Value::as_object)
            .into_iter()
            .flat_map(|props| props.keys().map(String::as_str))
    }

    /// Names listed in the top-level `required` array
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.get("required")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    /// Borrow the underlying JSON value
    pub fn as_value(&self) -> &Value {
        &self.0
    }

    /// Take the underlying JSON value
    pub fn into_value(self) -> Value {
        self.0
    }

    /// Compact JSON text
    pub fn to_json_string(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.0)
    }

    /// Indented JSON text
    pub fn to_json_string_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }
}

impl From<Value> for SchemaDocument {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

impl From<SchemaDocument> for Value {
    fn from(document: SchemaDocument) -> Self {
        document.0
    }
}

impl AsRef<Value> for SchemaDocument {
    fn as_ref(&self) -> &Value {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> SchemaDocument {
        SchemaDocument::new(json!({
            "typeName": "My::Resource::Type",
            "description": "A sample resource",
            "properties": {
                "Id": {"type": "string"},
                "Name": {"type": "string"}
            },
            "required": ["Name"]
        }))
    }

    #[test]
    fn test_queries() {
        let doc = sample();
        assert_eq!(doc.type_name(), Some("My::Resource::Type"));
        assert_eq!(doc.description(), Some("A sample resource"));
        assert_eq!(doc.pointer("/properties/Id/type"), Some(&json!("string")));
        assert_eq!(doc.properties().collect::<Vec<_>>(), vec!["Id", "Name"]);
        assert_eq!(doc.required().collect::<Vec<_>>(), vec!["Name"]);
    }

    #[test]
    fn test_queries_on_non_object_root() {
        let doc = SchemaDocument::new(json!([1, 2, 3]));
        assert_eq!(doc.type_name(), None);
        assert_eq!(doc.properties().count(), 0);
        assert_eq!(doc.required().count(), 0);
        assert!(doc.as_object().is_none());
    }

    #[test]
    fn test_serializes_transparently() {
        let doc = sample();
        let text = doc.to_json_string().unwrap();
        assert!(text.starts_with('{'));
        assert_eq!(serde_json::to_value(&doc).unwrap(), doc.as_value().clone());
        assert_eq!(SchemaDocument::from_json_str(&text).unwrap(), doc);
    }

    #[test]
    fn test_key_order_is_insignificant() {
        let a = SchemaDocument::from_json_str(r#"{"a":1,"b":2}"#).unwrap();
        let b = SchemaDocument::from_json_str(r#"{"b":2,"a":1}"#).unwrap();
        assert_eq!(a, b);
    }
}
