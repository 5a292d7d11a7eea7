//! Typed JSON Schema output documents.
//!
//! Downstream consumers rely on exact key presence, so optional keywords
//! are explicit `Option` members with `skip_serializing_if`, while
//! `required` serializes even when empty. Property insertion order is
//! preserved through `IndexMap`.

use indexmap::IndexMap;
use serde::Serialize;

/// One JSON Schema document, produced per node shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDocument {
    /// Derived from the shape subject's local name: trailing `Shape`
    /// stripped, first character lower-cased.
    pub id: String,
    /// Derived from the `sh:targetClass` value.
    pub title: String,
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Names of properties with a declared minimum cardinality above zero,
    /// in the order they were encountered.
    pub required: Vec<String>,
    pub properties: IndexMap<String, SchemaNode>,
    /// `false` iff the shape is closed.
    #[serde(rename = "additionalProperties")]
    pub additional_properties: bool,
}

impl SchemaDocument {
    pub(crate) fn new(id: String, title: String, additional_properties: bool) -> Self {
        Self {
            id,
            title,
            schema_type: "object".to_owned(),
            required: Vec::new(),
            properties: IndexMap::new(),
            additional_properties,
        }
    }
}

/// A property slot (or array `items` slot): either a fragment that may
/// still carry a `$ref`, or a full sub-document after unique-mode inlining.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SchemaNode {
    Document(SchemaDocument),
    Property(PropertySchema),
}

/// JSON Schema fragment for a single property. Only the keywords that were
/// actually constrained are serialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PropertySchema {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(rename = "exclusiveMinimum", skip_serializing_if = "Option::is_none")]
    pub exclusive_minimum: Option<f64>,
    #[serde(rename = "exclusiveMaximum", skip_serializing_if = "Option::is_none")]
    pub exclusive_maximum: Option<f64>,
    #[serde(rename = "minLength", skip_serializing_if = "Option::is_none")]
    pub min_length: Option<f64>,
    #[serde(rename = "maxLength", skip_serializing_if = "Option::is_none")]
    pub max_length: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<Vec<String>>,
    #[serde(rename = "minItems", skip_serializing_if = "Option::is_none")]
    pub min_items: Option<u32>,
    #[serde(rename = "maxItems", skip_serializing_if = "Option::is_none")]
    pub max_items: Option<u32>,
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
}
