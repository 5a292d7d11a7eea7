//! Property-block parsing: splits `sh:property [ … ]` blocks into clauses
//! and maps each recognized predicate onto the accumulating JSON Schema
//! fragment through a dispatch table, so every mapping rule is testable on
//! its own.

use crate::schema::{PropertySchema, SchemaDocument, SchemaNode};
use crate::{Error, SchemaOptions, local_name, scanner, shape_label, vocab};

/// One property constraint under construction. The array/scalar decision
/// and the required flag are resolved only after every clause of the block
/// has been applied.
#[derive(Debug)]
struct PropertyBuilder {
    name: Option<String>,
    schema: PropertySchema,
    required: bool,
    // a property is array-shaped unless `sh:maxCount 1` says otherwise
    array: bool,
}

type Apply = fn(&mut PropertyBuilder, &str, &str) -> Result<(), Error>;

const DISPATCH: &[(&str, Apply)] = &[
    (vocab::SH_PATH, path),
    (vocab::SH_NAME, display_name),
    (vocab::SH_DATATYPE, datatype),
    (vocab::SH_DESCRIPTION, description),
    (vocab::SH_MAX_EXCLUSIVE, max_exclusive),
    (vocab::SH_MAX_INCLUSIVE, max_inclusive),
    (vocab::SH_MIN_INCLUSIVE, min_inclusive),
    (vocab::SH_MIN_EXCLUSIVE, min_exclusive),
    (vocab::SH_MAX_LENGTH, max_length),
    (vocab::SH_MIN_LENGTH, min_length),
    (vocab::SH_PATTERN, pattern),
    (vocab::SH_IN, in_list),
    (vocab::SH_MIN_COUNT, min_count),
    (vocab::SH_MAX_COUNT, max_count),
    (vocab::SH_NODE, node),
];

impl PropertyBuilder {
    fn new() -> Self {
        Self {
            name: None,
            schema: PropertySchema::default(),
            required: false,
            array: true,
        }
    }

    fn apply(&mut self, predicate: &str, value: &str, base_path: &str) -> Result<(), Error> {
        for (known, run) in DISPATCH {
            if *known == predicate {
                return run(self, value, base_path);
            }
        }
        Ok(()) // unknown predicates are ignored
    }

    fn finish(
        mut self,
        block: &str,
        options: &SchemaOptions,
    ) -> Result<(String, PropertySchema, bool), Error> {
        let Some(name) = self.name.take() else {
            return Err(Error::MissingPath {
                block: block.trim().to_owned(),
            });
        };

        if options.exclude_properties.contains(&name) {
            self.required = false;
        }

        let schema = if self.array {
            wrap_as_array(self.schema)
        } else {
            PropertySchema {
                min_items: None,
                max_items: None,
                ..self.schema
            }
        };

        Ok((name, schema, self.required))
    }
}

/// Moves the scalar keywords onto `items` and keeps the collection-level
/// ones (`title`, `description`, `minItems`, `maxItems`) on the wrapper.
/// A `$ref` set by `sh:node` travels with `items`, not the wrapper.
fn wrap_as_array(schema: PropertySchema) -> PropertySchema {
    let PropertySchema {
        schema_type,
        title,
        description,
        minimum,
        maximum,
        exclusive_minimum,
        exclusive_maximum,
        min_length,
        max_length,
        pattern,
        enumeration,
        min_items,
        max_items,
        reference,
        items: _,
    } = schema;

    let items = PropertySchema {
        schema_type,
        minimum,
        maximum,
        exclusive_minimum,
        exclusive_maximum,
        min_length,
        max_length,
        pattern,
        enumeration,
        reference,
        ..PropertySchema::default()
    };

    PropertySchema {
        schema_type: Some("array".to_owned()),
        title,
        description,
        min_items,
        max_items,
        items: Some(Box::new(SchemaNode::Property(items))),
        ..PropertySchema::default()
    }
}

fn path(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    builder.name = Some(local_name(value.trim()).to_owned());
    Ok(())
}

fn display_name(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    builder.schema.title = Some(unquote(value).to_owned());
    Ok(())
}

fn datatype(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    let json_type = match value.trim() {
        vocab::XSD_STRING | vocab::XSD_DATE_TIME | vocab::XSD_ANY_URI => "string",
        vocab::XSD_DOUBLE => "number",
        vocab::XSD_INTEGER => "integer",
        vocab::XSD_BOOLEAN => "boolean",
        other => {
            return Err(Error::InvalidDataType {
                value: other.to_owned(),
            });
        }
    };
    builder.schema.schema_type = Some(json_type.to_owned());
    Ok(())
}

fn description(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    builder.schema.description = Some(unquote(value).to_owned());
    Ok(())
}

fn max_exclusive(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    builder.schema.exclusive_maximum = numeric(value);
    Ok(())
}

fn max_inclusive(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    builder.schema.maximum = numeric(value);
    Ok(())
}

fn min_inclusive(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    builder.schema.minimum = numeric(value);
    Ok(())
}

fn min_exclusive(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    builder.schema.exclusive_minimum = numeric(value);
    Ok(())
}

fn max_length(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    builder.schema.max_length = numeric(value);
    Ok(())
}

fn min_length(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    builder.schema.min_length = numeric(value);
    Ok(())
}

fn pattern(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    // double-escaped backslashes collapse, applied twice for the
    // quadruple-escaped case
    let pattern = unquote(value).replace("\\\\", "\\").replace("\\\\", "\\");
    builder.schema.pattern = Some(pattern);
    Ok(())
}

fn in_list(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    builder.schema.enumeration = Some(scanner::quoted_strings(value));
    builder.schema.schema_type = Some("string".to_owned());
    Ok(())
}

fn min_count(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    if let Some(count) = integer(value)
        && count > 0
    {
        builder.required = true;
        builder.schema.min_items = Some(count);
    }
    Ok(())
}

fn max_count(builder: &mut PropertyBuilder, value: &str, _: &str) -> Result<(), Error> {
    if let Some(count) = integer(value) {
        if count == 1 {
            builder.array = false;
        }
        if builder.array {
            builder.schema.max_items = Some(count);
        }
    }
    Ok(())
}

fn node(builder: &mut PropertyBuilder, value: &str, base_path: &str) -> Result<(), Error> {
    builder.schema.schema_type = Some("object".to_owned());
    builder.schema.reference = Some(format!("{base_path}{}", shape_label(value)));
    Ok(())
}

fn unquote(value: &str) -> &str {
    let value = value.trim();
    value
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(value)
}

fn numeric(value: &str) -> Option<f64> {
    value.trim().trim_matches('"').parse().ok()
}

fn integer(value: &str) -> Option<u32> {
    value.trim().trim_matches('"').parse().ok()
}

/// Splits the shape statement on the `sh:property` predicate, builds each
/// bracketed block, and fills the document's `properties`/`required`.
/// Excluded property names are dropped at the end, after all blocks built.
pub(crate) fn add_properties(
    statement: &str,
    options: &SchemaOptions,
    schema: &mut SchemaDocument,
) -> Result<(), Error> {
    for fragment in statement.split(vocab::SH_PROPERTY) {
        let fragment = fragment.trim();
        if !fragment.starts_with('[') {
            continue;
        }

        let block = block_content(fragment);
        let (name, property, required) = build_property(block, options)?;
        schema
            .properties
            .insert(name.clone(), SchemaNode::Property(property));
        if required {
            schema.required.push(name);
        }
    }

    for name in &options.exclude_properties {
        schema.properties.shift_remove(name);
    }

    Ok(())
}

fn build_property(
    block: &str,
    options: &SchemaOptions,
) -> Result<(String, PropertySchema, bool), Error> {
    let mut builder = PropertyBuilder::new();

    for clause in scanner::split_clauses(block) {
        let (predicate, value) = clause.split_once(' ').unwrap_or((clause.as_str(), ""));
        builder.apply(predicate, value, &options.base_path)?;
    }

    builder.finish(block, options)
}

/// Content between the block's wrapping `[` and its last `]`.
fn block_content(fragment: &str) -> &str {
    let inner = fragment.strip_prefix('[').unwrap_or(fragment);
    match inner.rfind(']') {
        Some(end) => &inner[..end],
        None => inner,
    }
}
