//! PEP 508-style requirement string parser
//!
//! Handles the requirement syntax found in `install_requires`, wheel
//! metadata and `requirements.txt`-style lists:
//! - `foo`
//! - `foo>=1.0,!=1.2.*`
//! - `foo[extra1,extra2] (>=1.0)`
//! - `foo>=1.0; python_version < "3.9"` (the marker is dropped)
//!
//! Environment marker evaluation is out of scope; markers are stripped
//! before parsing.

use crate::domain::{Operator, Requirement};
use regex::Regex;
use std::sync::LazyLock;

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z0-9][A-Za-z0-9._-]*)\s*(?:\[([^\]]*)\])?\s*(.*)$").unwrap()
});

// Longest operators first so that `===` is not consumed as `==`
static CLAUSE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(===|==|~=|!=|<=|>=|<|>)\s*([A-Za-z0-9._*+!-]+)\s*$").unwrap()
});

/// Parses one raw requirement string into a [`Requirement`]
pub fn parse_requirement(raw: &str) -> Result<Requirement, String> {
    // Environment markers are a separate concern; drop them
    let without_marker = raw.split(';').next().unwrap_or("").trim();
    if without_marker.is_empty() {
        return Err("empty requirement".to_string());
    }

    let caps = NAME_RE
        .captures(without_marker)
        .ok_or_else(|| "missing package name".to_string())?;
    let name = caps[1].to_string();
    let extras = caps
        .get(2)
        .map(|m| {
            m.as_str()
                .split(',')
                .map(|extra| extra.trim().to_string())
                .filter(|extra| !extra.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let mut spec_part = caps.get(3).map(|m| m.as_str().trim()).unwrap_or("");
    // PEP 508 allows the specifier list in parentheses
    if let Some(inner) = spec_part
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
    {
        spec_part = inner.trim();
    }

    let specs = if spec_part.is_empty() {
        Vec::new()
    } else {
        parse_spec_clauses(spec_part)?
    };

    Ok(Requirement {
        name,
        extras,
        specs,
    })
}

/// Parses a comma-separated specifier list (`>=1.0,!=1.2.*`)
fn parse_spec_clauses(spec_part: &str) -> Result<Vec<(Operator, String)>, String> {
    spec_part
        .split(',')
        .map(|clause| {
            let caps = CLAUSE_RE
                .captures(clause)
                .ok_or_else(|| format!("invalid specifier clause '{}'", clause.trim()))?;
            let operator: Operator = caps[1].parse()?;
            Ok((operator, caps[2].to_string()))
        })
        .collect()
}
