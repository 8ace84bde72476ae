//! Dependency list building
//!
//! Parses a raw list of requirement strings (or structured metadata
//! entries), converts each entry and assembles the final declaration list.
//! Unparsable entries are skipped with a recorded warning; partial metadata
//! is routine and must never abort a conversion.
//!
//! The final list is sorted reverse-lexicographically by expression text
//! and de-duplicated, so the generated manifest is identical across runs.

use crate::convert::requirement::convert_requirement;
use crate::convert::ConvertOptions;
use crate::domain::{Declaration, Requirement};
use crate::parser::{parse_requirement, parse_structured_entry};

/// Result of building a dependency list
#[derive(Debug, Default)]
pub struct BuildOutcome {
    /// Ordered, de-duplicated declarations
    pub declarations: Vec<Declaration>,
    /// One message per skipped input entry
    pub warnings: Vec<String>,
}

impl BuildOutcome {
    /// Appends another outcome's declarations and warnings
    pub fn merge(&mut self, other: BuildOutcome) {
        self.declarations.extend(other.declarations);
        self.warnings.extend(other.warnings);
    }
}

/// Builds declarations from PEP 508-style requirement strings
pub fn from_requirement_strings<I, S>(raw_requirements: I, options: &ConvertOptions) -> BuildOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build(raw_requirements, options, |raw| parse_requirement(raw))
}

/// Builds declarations from structured metadata entries
/// (`"foo (>=1.2,!=1.3)"` style)
pub fn from_structured_entries<I, S>(entries: I, options: &ConvertOptions) -> BuildOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    build(entries, options, |raw| parse_structured_entry(raw))
}

fn build<I, S, P>(entries: I, options: &ConvertOptions, parse: P) -> BuildOutcome
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: Fn(&str) -> Result<Requirement, String>,
{
    let mut declarations = Vec::new();
    let mut warnings = Vec::new();

    for entry in entries {
        let entry = entry.as_ref();
        match parse(entry) {
            Ok(requirement) => {
                declarations.extend(convert_requirement(&requirement, options));
            }
            Err(message) => {
                warnings.push(format!("skipped requirement '{}': {}", entry, message));
            }
        }
    }

    BuildOutcome {
        declarations: finalize(declarations),
        warnings,
    }
}

/// Reverse-lexicographic sort by expression, then de-duplication of
/// identical (kind, name, expression) triples
fn finalize(mut declarations: Vec<Declaration>) -> Vec<Declaration> {
    declarations.sort_by(|a, b| {
        b.expression
            .cmp(&a.expression)
            .then_with(|| b.kind.cmp(&a.kind))
            .then_with(|| b.name.cmp(&a.name))
    });
    declarations.dedup();
    declarations
}
