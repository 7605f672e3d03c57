//! Deserializable representation of the blocks manifest document.
//!
//! The types mirror the wire contract served at the manifest endpoint so
//! callers can reason about block metadata without ad-hoc JSON handling. The
//! query logic only consumes identifiers, `short_description`, and the
//! per-property kind tags; everything else is carried because the document
//! ships it and downstream tooling may want it.

use crate::catalog::identity::BlockId;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Clone, Debug, Deserialize)]
/// Root manifest document: the full set of block entries.
pub struct Catalog {
    pub blocks: Vec<BlockEntry>,
}

#[derive(Clone, Debug, Deserialize)]
/// One catalog item describing a workflow block.
pub struct BlockEntry {
    pub manifest_type_identifier: BlockId,
    #[serde(default)]
    pub manifest_type_identifier_aliases: Vec<BlockId>,
    pub block_schema: BlockSchema,
    #[serde(default)]
    pub human_friendly_block_name: Option<String>,
    #[serde(default)]
    pub fully_qualified_block_class_name: Option<String>,
    #[serde(default)]
    pub block_source: Option<String>,
    #[serde(default)]
    pub outputs_manifest: Vec<OutputDescriptor>,
    #[serde(default)]
    pub execution_engine_compatibility: Option<String>,
    #[serde(default)]
    pub input_dimensionality_offsets: BTreeMap<String, i64>,
    #[serde(default)]
    pub dimensionality_reference_property: Option<String>,
    #[serde(default)]
    pub output_dimensionality_offset: Option<i64>,
}

#[derive(Clone, Debug, Default, Deserialize)]
/// Input schema for a block: named properties plus descriptive metadata.
pub struct BlockSchema {
    // BTreeMap keeps property iteration in ascending name order, which the
    // kind query exposes as a contract.
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyDescriptor>,
    #[serde(default)]
    pub short_description: Option<String>,
    #[serde(default)]
    pub long_description: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub block_type: Option<String>,
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(rename = "type", default)]
    pub schema_type: Option<String>,
    #[serde(rename = "additionalProperties", default)]
    pub additional_properties: Option<bool>,
}

#[derive(Clone, Debug, Default, Deserialize)]
/// One named input property: literal constraints plus semantic kind tags,
/// either directly on the descriptor or nested inside `anyOf` alternatives.
pub struct PropertyDescriptor {
    #[serde(default)]
    pub kind: Vec<KindTag>,
    #[serde(rename = "anyOf", default)]
    pub any_of: Vec<PropertyAlternative>,
    #[serde(rename = "const", default)]
    pub literal: Option<Value>,
    #[serde(rename = "enum", default)]
    pub allowed: Option<Vec<Value>>,
    #[serde(rename = "default", default)]
    pub default_value: Option<Value>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub value_type: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub examples: Option<Vec<Value>>,
    #[serde(default)]
    pub ge: Option<f64>,
    #[serde(default)]
    pub le: Option<f64>,
    #[serde(default)]
    pub reference: Option<bool>,
    #[serde(default)]
    pub selected_element: Option<String>,
}

/// One branch of a property's `anyOf` union.
///
/// Only branches that carry their own kind tags participate in kind
/// matching; a bare type reference never matches. The untagged encoding
/// tries `Kinded` first, so any branch with a `kind` array lands there.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum PropertyAlternative {
    Kinded(KindedAlternative),
    TypeOnly(TypeAlternative),
}

#[derive(Clone, Debug, Deserialize)]
/// Alternative shape that carries its own kind tags.
pub struct KindedAlternative {
    pub kind: Vec<KindTag>,
    #[serde(rename = "type", default)]
    pub value_type: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub reference: Option<bool>,
    #[serde(default)]
    pub selected_element: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
/// Bare type reference alternative; never matched by kind queries.
pub struct TypeAlternative {
    // The wire sends a string here, but numbers have been observed; keep the
    // raw value rather than guessing.
    #[serde(rename = "type", default)]
    pub value_type: Option<Value>,
}

#[derive(Clone, Debug, Deserialize)]
/// Semantic label describing what domain concept a property represents.
pub struct KindTag {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub docs: Option<String>,
    #[serde(default)]
    pub serialised_data_type: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
/// Declared output of a block, with the kinds it produces.
pub struct OutputDescriptor {
    pub name: String,
    #[serde(default)]
    pub kind: Vec<KindTag>,
}

/// Parse a manifest document body into a `Catalog`.
pub fn parse_catalog(data: &str) -> serde_json::Result<Catalog> {
    serde_json::from_str(data)
}
