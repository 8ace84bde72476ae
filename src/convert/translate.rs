//! Constraint translation from PEP 440 specifier clauses to RPM expressions
//!
//! Each function takes one (operator, version string) clause and produces one
//! RPM boolean-dependency expression containing the `{name}` placeholder.
//!
//! The tilde/caret corrections are the load-bearing part. RPM sorts
//! `~~suffix < ~suffix < bare < ^suffix`, so a strict bound at a clean
//! release number must be adjusted or it silently admits or rejects
//! dev/pre/post builds of that exact release:
//! - `< V` on a clean V becomes `< V~~`, keeping dev and pre-releases of V
//!   out of the matched set
//! - `> V` on a clean V becomes `> V.0`, keeping post-releases of V out
//!
//! Unsupported combinations degrade to the literal [`INVALID_VERSION`]
//! sentinel, which flows into the generated spec file as grep-able text
//! instead of aborting the conversion.

use crate::domain::{Operator, RpmVersion, NAME_PLACEHOLDER};

/// Sentinel emitted for operator/version combinations that cannot be
/// expressed, and for arithmetic on non-structured version strings
pub const INVALID_VERSION: &str = "Invalid version";

/// Translates a single specifier clause into an RPM constraint expression
pub fn translate(operator: Operator, version_id: &str) -> String {
    match operator {
        Operator::Compatible => convert_compatible(version_id),
        Operator::Equal => convert_equal(version_id),
        Operator::ArbitraryEqual => convert_arbitrary_equal(version_id),
        Operator::NotEqual => convert_not_equal(version_id),
        Operator::LessOrEqual | Operator::Less | Operator::GreaterOrEqual | Operator::Greater => {
            convert_ordered(operator, version_id)
        }
    }
}

/// Returns the prefix of a `.*` wildcard specifier, or `None` for a plain
/// version string
fn strip_wildcard(version_id: &str) -> Option<&str> {
    version_id.strip_suffix(".*")
}

/// Lower and upper bound renderings for a compatible-release constraint.
///
/// `None` when the version is opaque or has fewer than two release
/// segments.
pub(crate) fn compatible_bounds(version_id: &str) -> Option<(String, String)> {
    let version = RpmVersion::parse(version_id);
    let parsed = version.as_parsed()?;
    let upper = parsed.compatible_upper_bound()?;
    Some((parsed.normalized().to_string(), upper.to_string()))
}

fn convert_compatible(version_id: &str) -> String {
    // Wildcard combined with compatible release is undefined
    if strip_wildcard(version_id).is_some() {
        return INVALID_VERSION.to_string();
    }
    match compatible_bounds(version_id) {
        Some((lower, upper)) => format!(
            "({NAME_PLACEHOLDER} >= {lower} with {NAME_PLACEHOLDER} < {upper})"
        ),
        None => INVALID_VERSION.to_string(),
    }
}

fn convert_equal(version_id: &str) -> String {
    if let Some(prefix) = strip_wildcard(version_id) {
        // ==X.Y.* is a prefix match, equivalent to a compatible release
        // starting at X.Y.0
        return convert_compatible(&format!("{}.0", prefix));
    }
    render_equality(version_id)
}

fn convert_arbitrary_equal(version_id: &str) -> String {
    if strip_wildcard(version_id).is_some() {
        return INVALID_VERSION.to_string();
    }
    render_equality(version_id)
}

/// Exact match; opaque legacy strings still produce a literal comparison
fn render_equality(version_id: &str) -> String {
    match RpmVersion::parse(version_id) {
        RpmVersion::Parsed(parsed) => {
            format!("{NAME_PLACEHOLDER} = {}", parsed.normalized())
        }
        RpmVersion::Legacy(raw) => format!("{NAME_PLACEHOLDER} = {}", raw),
    }
}

fn convert_not_equal(version_id: &str) -> String {
    if let Some(prefix) = strip_wildcard(version_id) {
        let Some(parsed) = RpmVersion::parse(prefix).as_parsed().cloned() else {
            return INVALID_VERSION.to_string();
        };
        // Exclude the whole prefix range. The lower bound gets the ~~
        // suffix so dev and pre-releases of the prefix are excluded too.
        let Some(upper) = parsed.incremented() else {
            return INVALID_VERSION.to_string();
        };
        return format!(
            "({NAME_PLACEHOLDER} < {parsed}~~ or {NAME_PLACEHOLDER} >= {upper})"
        );
    }
    let Some(parsed) = RpmVersion::parse(version_id).as_parsed().cloned() else {
        return INVALID_VERSION.to_string();
    };
    // Both bounds reference the same literal version: exactly that point is
    // excluded while its pre- and post-release neighbours stay admitted.
    format!("({NAME_PLACEHOLDER} < {parsed} or {NAME_PLACEHOLDER} > {parsed})")
}

fn convert_ordered(operator: Operator, version_id: &str) -> String {
    if let Some(prefix) = strip_wildcard(version_id) {
        let Some(parsed) = RpmVersion::parse(prefix).as_parsed().cloned() else {
            return INVALID_VERSION.to_string();
        };
        // PEP 440 does not define prefix matching for ordered comparisons;
        // the inclusive/exclusive remapping keeps the bound on the safe side
        // of the prefix's own release.
        let op = match operator {
            Operator::Greater => ">=",
            Operator::LessOrEqual => "<",
            other => other.as_str(),
        };
        return format!("{NAME_PLACEHOLDER} {op} {parsed}");
    }

    let parsed = match RpmVersion::parse(version_id) {
        RpmVersion::Parsed(parsed) => parsed,
        // Opaque versions compare literally; the boundary corrections need
        // a decomposed release and are skipped.
        RpmVersion::Legacy(raw) => {
            return format!("{NAME_PLACEHOLDER} {} {}", operator.as_str(), raw)
        }
    };
    match operator {
        Operator::Less if !parsed.has_qualifier() => {
            // Keep dev and pre-releases of exactly V from satisfying < V
            format!("{NAME_PLACEHOLDER} < {parsed}~~")
        }
        Operator::Greater if !parsed.has_qualifier() => {
            // Keep post-releases of exactly V from satisfying > V
            format!("{NAME_PLACEHOLDER} > {parsed}.0")
        }
        _ => format!("{NAME_PLACEHOLDER} {} {parsed}", operator.as_str()),
    }
}
