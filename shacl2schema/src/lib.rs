//! Converts a restricted subset of SHACL-over-Turtle into JSON Schema
//! documents.
//!
//! [`schemas_from_ttl`] returns one schema per node shape, with cross-shape
//! links expressed as `$ref`; [`unique_schema_from_ttl`] takes the first
//! shape as the main schema and inlines every resolvable reference.
//!
//! The input is assumed to be well-formed, pre-validated Turtle. Beyond
//! the four explicit validation checks (see [`Error`]), malformed input
//! produces best-effort output rather than a diagnostic.

use itertools::Itertools;

mod prefixes;
mod property;
mod scanner;
pub mod schema;
mod vocab;

pub use schema::{PropertySchema, SchemaDocument, SchemaNode};

use prefixes::PrefixTable;

/// Options accepted by both conversion operations.
#[derive(Debug, Clone, Default)]
pub struct SchemaOptions {
    /// Prefixed to every `$ref` value.
    pub base_path: String,
    /// Property names omitted from every produced schema, and from
    /// `required` even when their cardinality implies it.
    pub exclude_properties: Vec<String>,
    /// Emit an info-level summary of the loaded schema ids.
    pub log: bool,
}

#[derive(derive_more::Error, derive_more::Display, Debug)]
pub enum Error {
    #[display("targetClass is required in shape `{shape}`")]
    MissingTargetClass { shape: String },

    #[display("property block has no path, property name could not be derived: {block}")]
    MissingPath { block: String },

    #[display("invalid data type: {value}")]
    InvalidDataType { value: String },

    #[display("rdf:type must be listed in ignoredProperties of shape `{shape}`")]
    MissingIgnoredType { shape: String },

    #[display("input contains no shape statements")]
    EmptyDocument,
}

/// Converts every node shape of the input into its own schema document,
/// in order of appearance. Links to other shapes stay `$ref` values.
pub fn schemas_from_ttl(ttl: &str, options: &SchemaOptions) -> Result<Vec<SchemaDocument>, Error> {
    let normalized = scanner::normalize(ttl);
    let statements = scanner::split_statements(&normalized);
    let prefixes = PrefixTable::collect(&statements);

    let mut schemas = Vec::new();
    for statement in &statements {
        let statement = statement.trim();
        if statement.is_empty() || statement.starts_with("@prefix") {
            continue;
        }

        let statement = prefixes.expand(statement);
        let mut schema = build_shape(&statement)?;
        property::add_properties(&statement, options, &mut schema)?;
        tracing::trace!(id = %schema.id, title = %schema.title, "built shape model");
        schemas.push(schema);
    }

    if options.log {
        tracing::info!(
            "successfully loaded models: {}",
            schemas.iter().map(|schema| schema.id.as_str()).join(", ")
        );
    }

    Ok(schemas)
}

/// Converts the input into one schema: the first shape is the main one,
/// and every property (or its array `items`) whose `$ref` resolves to
/// another shape in the same input is replaced by a deep copy of that
/// shape's document. Unresolved references are left as-is. Inlining is
/// depth-one: references inside an inlined sub-schema are not followed.
pub fn unique_schema_from_ttl(ttl: &str, options: &SchemaOptions) -> Result<SchemaDocument, Error> {
    let schemas = schemas_from_ttl(ttl, options)?;
    let mut main = schemas.first().cloned().ok_or(Error::EmptyDocument)?;

    for slot in main.properties.values_mut() {
        let direct = match slot {
            SchemaNode::Property(property) => property.reference.clone(),
            SchemaNode::Document(_) => None,
        };
        if let Some(reference) = direct {
            if let Some(target) = lookup(&schemas, &reference, options) {
                *slot = SchemaNode::Document(target.clone());
            }
            continue;
        }

        // array property: the reference lives on items
        let SchemaNode::Property(property) = slot else {
            continue;
        };
        let Some(items) = property.items.as_mut() else {
            continue;
        };
        let nested = match items.as_ref() {
            SchemaNode::Property(item) => item.reference.clone(),
            SchemaNode::Document(_) => None,
        };
        if let Some(reference) = nested
            && let Some(target) = lookup(&schemas, &reference, options)
        {
            **items = SchemaNode::Document(target.clone());
        }
    }

    Ok(main)
}

fn lookup<'a>(
    schemas: &'a [SchemaDocument],
    reference: &str,
    options: &SchemaOptions,
) -> Option<&'a SchemaDocument> {
    let id = reference
        .strip_prefix(options.base_path.as_str())
        .unwrap_or(reference);
    schemas.iter().find(|schema| schema.id == id)
}

/// Builds the shape-level document: id from the subject IRI, title from
/// `sh:targetClass`, `additionalProperties` from the closed marker.
/// `properties` and `required` are filled afterwards by the property
/// mapper.
fn build_shape(statement: &str) -> Result<SchemaDocument, Error> {
    let id = shape_label(statement);

    let title = shape_title(statement).ok_or_else(|| Error::MissingTargetClass {
        shape: id.clone(),
    })?;

    ensure_type_is_ignored(statement, &id)?;

    let additional_properties = !statement.contains(vocab::SH_CLOSED_TRUE);
    Ok(SchemaDocument::new(id, title, additional_properties))
}

fn shape_title(statement: &str) -> Option<String> {
    let clause = scanner::split_clauses(statement)
        .into_iter()
        .find(|clause| clause.starts_with(vocab::SH_TARGET_CLASS))?;
    let value = clause.split_whitespace().nth(1)?;

    Some(if value.starts_with('<') {
        local_name(value).to_owned()
    } else {
        value.to_owned()
    })
}

/// The downstream structural validator emits a synthetic `rdf:type`
/// triple; a shape that does not ignore it would flag every instance, so
/// its absence from `sh:ignoredProperties` is a hard error.
fn ensure_type_is_ignored(statement: &str, shape: &str) -> Result<(), Error> {
    let ignores_type = scanner::split_clauses(statement)
        .into_iter()
        .find(|clause| clause.starts_with(vocab::SH_IGNORED_PROPERTIES))
        .is_some_and(|clause| {
            clause
                .split_whitespace()
                .any(|token| token == vocab::RDF_TYPE)
        });

    if ignores_type {
        Ok(())
    } else {
        Err(Error::MissingIgnoredType {
            shape: shape.to_owned(),
        })
    }
}

/// Derives a schema id from the first token: the IRI's local name with a
/// trailing `Shape` suffix stripped and the first character lower-cased,
/// so `ex:FooShape` and `ex:Foo` both become `foo`.
pub(crate) fn shape_label(text: &str) -> String {
    let token = text.split_whitespace().next().unwrap_or_default();
    let local = local_name(token);
    let local = local.strip_suffix("Shape").unwrap_or(local);

    let mut chars = local.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Local name of a bracketed IRI: the text after the last `#`, else after
/// the last `/`, else the whole IRI.
pub(crate) fn local_name(iri: &str) -> &str {
    let iri = iri.trim_matches(|c| c == '<' || c == '>');
    match iri.rsplit_once('#') {
        Some((_, local)) => local,
        None => iri.rsplit('/').next().unwrap_or(iri),
    }
}
