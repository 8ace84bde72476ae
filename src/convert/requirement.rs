//! Requirement-level conversion
//!
//! Turns one parsed requirement into spec-file declarations. Two output
//! modes exist:
//! - rich (default): all clauses of one requirement collapse into a single
//!   declaration, joined with RPM's boolean `with`
//! - legacy: for targets without boolean dependency support, `~=` expands
//!   into two plain Requires lines and `!=` is routed to Conflicts

use crate::convert::translate::{compatible_bounds, translate, INVALID_VERSION};
use crate::convert::ConvertOptions;
use crate::domain::{Declaration, DeclarationKind, Operator, Requirement, NAME_PLACEHOLDER};

/// Converts one requirement into an ordered list of declarations
pub fn convert_requirement(requirement: &Requirement, options: &ConvertOptions) -> Vec<Declaration> {
    let mut declarations = if options.rich_deps {
        convert_rich(requirement)
    } else {
        convert_legacy(requirement)
    };

    if !options.runtime {
        for declaration in &mut declarations {
            declaration.kind = declaration.kind.build_time();
        }
    }
    declarations
}

/// Rich mode: one declaration per requirement, compound when needed
fn convert_rich(requirement: &Requirement) -> Vec<Declaration> {
    let mut expressions: Vec<String> = requirement
        .specs
        .iter()
        .map(|(operator, version)| translate(*operator, version))
        .collect();

    let expression = match expressions.len() {
        0 => NAME_PLACEHOLDER.to_string(),
        1 => expressions.pop().unwrap(),
        _ => {
            // Reverse-lexicographic clause order keeps the compound
            // expression reproducible across runs
            expressions.sort_by(|a, b| b.cmp(a));
            format!("({})", expressions.join(" with "))
        }
    };

    vec![Declaration::new(
        DeclarationKind::Requires,
        &requirement.name,
        expression,
    )]
}

/// Legacy mode: no boolean operators available in a single constraint
fn convert_legacy(requirement: &Requirement) -> Vec<Declaration> {
    let mut requires: Vec<String> = Vec::new();
    let mut conflicts: Vec<String> = Vec::new();

    for (operator, version) in &requirement.specs {
        match operator {
            Operator::Compatible => match legacy_compatible_bounds(version) {
                Some((lower, upper)) => {
                    requires.push(lower);
                    requires.push(upper);
                }
                None => requires.push(INVALID_VERSION.to_string()),
            },
            // A != constraint becomes an exclusion of the exact version
            Operator::NotEqual => conflicts.push(translate(Operator::Equal, version)),
            _ => requires.push(translate(*operator, version)),
        }
    }

    if requires.is_empty() {
        requires.push(NAME_PLACEHOLDER.to_string());
    }
    requires.sort_by(|a, b| b.cmp(a));
    conflicts.sort_by(|a, b| b.cmp(a));

    let mut declarations = Vec::new();
    for expression in conflicts {
        declarations.push(Declaration::new(
            DeclarationKind::Conflicts,
            &requirement.name,
            expression,
        ));
    }
    for expression in requires {
        declarations.push(Declaration::new(
            DeclarationKind::Requires,
            &requirement.name,
            expression,
        ));
    }
    declarations
}

/// Split compatible-release bounds for targets without `with` support
fn legacy_compatible_bounds(version_id: &str) -> Option<(String, String)> {
    if version_id.ends_with(".*") {
        return None;
    }
    let (lower, upper) = compatible_bounds(version_id)?;
    Some((
        format!("{NAME_PLACEHOLDER} >= {lower}"),
        format!("{NAME_PLACEHOLDER} < {upper}"),
    ))
}
