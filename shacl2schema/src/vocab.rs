//! Bracketed IRI constants for the vocabulary the converter recognizes.
//!
//! Prefix resolution rewrites every `prefix:local` token into the fully
//! bracketed `<iri>` spelling, so all comparisons downstream are against
//! these forms verbatim.

pub(crate) const SH_PROPERTY: &str = "<http://www.w3.org/ns/shacl#property>";
pub(crate) const SH_PATH: &str = "<http://www.w3.org/ns/shacl#path>";
pub(crate) const SH_NAME: &str = "<http://www.w3.org/ns/shacl#name>";
pub(crate) const SH_DATATYPE: &str = "<http://www.w3.org/ns/shacl#datatype>";
pub(crate) const SH_DESCRIPTION: &str = "<http://www.w3.org/ns/shacl#description>";
pub(crate) const SH_MAX_EXCLUSIVE: &str = "<http://www.w3.org/ns/shacl#maxExclusive>";
pub(crate) const SH_MAX_INCLUSIVE: &str = "<http://www.w3.org/ns/shacl#maxInclusive>";
pub(crate) const SH_MIN_INCLUSIVE: &str = "<http://www.w3.org/ns/shacl#minInclusive>";
pub(crate) const SH_MIN_EXCLUSIVE: &str = "<http://www.w3.org/ns/shacl#minExclusive>";
pub(crate) const SH_MAX_LENGTH: &str = "<http://www.w3.org/ns/shacl#maxLength>";
pub(crate) const SH_MIN_LENGTH: &str = "<http://www.w3.org/ns/shacl#minLength>";
pub(crate) const SH_PATTERN: &str = "<http://www.w3.org/ns/shacl#pattern>";
pub(crate) const SH_IN: &str = "<http://www.w3.org/ns/shacl#in>";
pub(crate) const SH_MIN_COUNT: &str = "<http://www.w3.org/ns/shacl#minCount>";
pub(crate) const SH_MAX_COUNT: &str = "<http://www.w3.org/ns/shacl#maxCount>";
pub(crate) const SH_NODE: &str = "<http://www.w3.org/ns/shacl#node>";
pub(crate) const SH_TARGET_CLASS: &str = "<http://www.w3.org/ns/shacl#targetClass>";
pub(crate) const SH_IGNORED_PROPERTIES: &str = "<http://www.w3.org/ns/shacl#ignoredProperties>";

/// The exact clause text that marks a closed shape.
pub(crate) const SH_CLOSED_TRUE: &str = "<http://www.w3.org/ns/shacl#closed> true";

pub(crate) const RDF_TYPE: &str = "<http://www.w3.org/1999/02/22-rdf-syntax-ns#type>";

pub(crate) const XSD_STRING: &str = "<http://www.w3.org/2001/XMLSchema#string>";
pub(crate) const XSD_DATE_TIME: &str = "<http://www.w3.org/2001/XMLSchema#dateTime>";
pub(crate) const XSD_ANY_URI: &str = "<http://www.w3.org/2001/XMLSchema#anyURI>";
pub(crate) const XSD_DOUBLE: &str = "<http://www.w3.org/2001/XMLSchema#double>";
pub(crate) const XSD_INTEGER: &str = "<http://www.w3.org/2001/XMLSchema#integer>";
pub(crate) const XSD_BOOLEAN: &str = "<http://www.w3.org/2001/XMLSchema#boolean>";
