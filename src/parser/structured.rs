//! Parser for structured distribution-metadata dependency entries
//!
//! JSON-based distribution metadata (pydist.json / metadata.json style)
//! lists dependencies as `"name (>=1.2,!=1.3)"` with the whole specifier
//! list parenthesized, or as a bare `"name"`. This format is looser than
//! PEP 508: a clause may be a bare version with no operator, which is
//! treated as `==`.

use crate::domain::{Operator, Requirement};

/// Parses one structured metadata entry into a [`Requirement`]
pub fn parse_structured_entry(entry: &str) -> Result<Requirement, String> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err("empty dependency entry".to_string());
    }

    let Some((name_part, rest)) = entry.split_once('(') else {
        return Ok(Requirement::unconstrained(entry));
    };

    let name = name_part.trim();
    if name.is_empty() {
        return Err("missing package name".to_string());
    }
    let inner = rest
        .strip_suffix(')')
        .ok_or_else(|| format!("unclosed parenthesis in '{}'", entry))?;

    let specs = inner
        .split(',')
        .map(parse_loose_clause)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Requirement::new(name, specs))
}

/// Splits the leading operator characters from the trailing version.
/// A clause without an operator is an exact-version pin.
fn parse_loose_clause(clause: &str) -> Result<(Operator, String), String> {
    let clause = clause.trim();
    let split_at = clause
        .find(|c: char| !matches!(c, '<' | '>' | '=' | '!' | '~'))
        .unwrap_or(clause.len());
    let (op_part, version) = clause.split_at(split_at);
    let version = version.trim();
    if version.is_empty() {
        return Err(format!("missing version in clause '{}'", clause));
    }

    let operator = if op_part.is_empty() {
        Operator::Equal
    } else {
        op_part.parse()?
    };
    Ok((operator, version.to_string()))
}
