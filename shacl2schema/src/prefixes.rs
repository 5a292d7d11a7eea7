//! `@prefix` collection and substitution.

use indexmap::IndexMap;
use itertools::Itertools;

/// Ordered `prefix → namespace` table, built once per conversion call from
/// the `@prefix` statements and discarded at the end of it.
#[derive(Debug, Default)]
pub(crate) struct PrefixTable {
    entries: IndexMap<String, String>,
}

impl PrefixTable {
    /// Reads every `@prefix` declaration: the name is the text before the
    /// first `:`, the namespace is the remainder with its angle brackets
    /// stripped.
    pub(crate) fn collect(statements: &[String]) -> Self {
        let mut entries = IndexMap::new();

        for statement in statements {
            let Some(rest) = statement.trim().strip_prefix("@prefix ") else {
                continue;
            };
            let Some((name, iri)) = rest.split_once(':') else {
                continue;
            };
            let iri = iri.replacen('<', "", 1).replacen('>', "", 1);
            entries.insert(name.trim().to_owned(), iri.trim().to_owned());
        }

        Self { entries }
    }

    /// Rewrites every `prefix:local` token of the statement into its fully
    /// bracketed `<namespace + local>` form, in table order. `[` is padded
    /// first so a bracket is never fused with the token behind it; tokens
    /// matching no known prefix pass through untouched (bare local names
    /// are allowed, e.g. a target class without a namespace).
    pub(crate) fn expand(&self, statement: &str) -> String {
        statement
            .replace('[', "[ ")
            .split(' ')
            .map(|word| {
                for (name, namespace) in &self.entries {
                    let marker = format!("{name}:");
                    if word.contains(&marker) {
                        return format!("<{}>", word.replacen(&marker, namespace, 1));
                    }
                }
                word.to_owned()
            })
            .join(" ")
    }
}
