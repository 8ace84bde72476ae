//! Integration tests for the conversion pipeline
//!
//! Exercises the library end to end: requirement strings through the
//! builder, rendering with name conversion, local pyproject.toml intake
//! and the orchestrator. No network access.

use py2rpm::cli::CliArgs;
use py2rpm::convert::{self, translate, ConvertOptions, INVALID_VERSION};
use py2rpm::domain::{Declaration, DeclarationKind, Operator};
use py2rpm::orchestrator::Orchestrator;
use py2rpm::render::{NameConverter, SpecRenderer};

use clap::Parser;
use std::fs;

fn rich() -> ConvertOptions {
    ConvertOptions::new(true, true)
}

fn legacy() -> ConvertOptions {
    ConvertOptions::new(true, false)
}

fn expressions(declarations: &[Declaration]) -> Vec<&str> {
    declarations.iter().map(|d| d.expression.as_str()).collect()
}

#[test]
fn test_compatible_release_pipeline() {
    let outcome = convert::from_requirement_strings(["pkg~=1.4.2"], &rich());
    assert_eq!(
        expressions(&outcome.declarations),
        vec!["({name} >= 1.4.2 with {name} < 1.5)"]
    );
}

#[test]
fn test_compatible_release_single_component_is_invalid() {
    assert_eq!(translate(Operator::Compatible, "5"), INVALID_VERSION);
}

#[test]
fn test_not_equal_pipeline() {
    let outcome = convert::from_requirement_strings(["pkg!=2.0"], &rich());
    assert_eq!(
        expressions(&outcome.declarations),
        vec!["({name} < 2.0 or {name} > 2.0)"]
    );
}

#[test]
fn test_not_equal_wildcard_pipeline() {
    let outcome = convert::from_requirement_strings(["pkg!=2.0.*"], &rich());
    assert_eq!(
        expressions(&outcome.declarations),
        vec!["({name} < 2.0~~ or {name} >= 2.1)"]
    );
}

#[test]
fn test_exclusive_bounds_pipeline() {
    let below = convert::from_requirement_strings(["pkg<3.0"], &rich());
    assert_eq!(expressions(&below.declarations), vec!["{name} < 3.0~~"]);

    let above = convert::from_requirement_strings(["pkg>3.0"], &rich());
    assert_eq!(expressions(&above.declarations), vec!["{name} > 3.0.0"]);
}

#[test]
fn test_equal_wildcard_pipeline() {
    let outcome = convert::from_requirement_strings(["pkg==2.4.*"], &rich());
    assert_eq!(
        expressions(&outcome.declarations),
        vec!["({name} >= 2.4 with {name} < 2.5)"]
    );
}

#[test]
fn test_multi_clause_requirement_joins_with() {
    let outcome = convert::from_requirement_strings(["requests>=2.0,<3.0"], &rich());
    assert_eq!(outcome.declarations.len(), 1);
    let expression = &outcome.declarations[0].expression;
    assert!(expression.starts_with('('));
    assert!(expression.ends_with(')'));
    assert!(expression.contains(" with "));
}

#[test]
fn test_prerelease_versions_map_to_tilde() {
    assert_eq!(translate(Operator::GreaterOrEqual, "1.0a1"), "{name} >= 1.0~a1");
    assert_eq!(translate(Operator::GreaterOrEqual, "1.0rc2"), "{name} >= 1.0~rc2");
    assert_eq!(
        translate(Operator::GreaterOrEqual, "1.0.dev5"),
        "{name} >= 1.0~~5"
    );
    assert_eq!(
        translate(Operator::GreaterOrEqual, "1.0.post3"),
        "{name} >= 1.0^post3"
    );
}

#[test]
fn test_legacy_compatible_release_expands_to_bounds() {
    let outcome = convert::from_requirement_strings(["pkg~=1.4.2"], &legacy());
    let mut exprs = expressions(&outcome.declarations);
    exprs.sort();
    assert_eq!(exprs, vec!["{name} < 1.5", "{name} >= 1.4.2"]);
    assert!(outcome
        .declarations
        .iter()
        .all(|d| d.kind == DeclarationKind::Requires));
}

#[test]
fn test_legacy_not_equal_becomes_conflicts() {
    let outcome = convert::from_requirement_strings(["pkg!=1.3"], &legacy());
    // the exclusion plus the bare unconstrained requires line
    assert_eq!(outcome.declarations.len(), 2);
    let conflict = outcome
        .declarations
        .iter()
        .find(|d| d.kind == DeclarationKind::Conflicts)
        .unwrap();
    assert_eq!(conflict.expression, "{name} = 1.3");
}

#[test]
fn test_build_time_kinds() {
    let options = ConvertOptions::new(false, false);
    let outcome = convert::from_requirement_strings(["pkg!=1.3", "six"], &options);
    assert!(outcome
        .declarations
        .iter()
        .any(|d| d.kind == DeclarationKind::BuildConflicts));
    assert!(outcome
        .declarations
        .iter()
        .any(|d| d.kind == DeclarationKind::BuildRequires));
}

#[test]
fn test_conversion_is_idempotent_under_duplicates() {
    let once = convert::from_requirement_strings(["flask>=1.0", "six"], &rich());
    let twice = convert::from_requirement_strings(
        ["flask>=1.0", "six", "flask>=1.0", "six"],
        &rich(),
    );
    assert_eq!(once.declarations, twice.declarations);
}

#[test]
fn test_unparsable_entries_never_abort() {
    let outcome = convert::from_requirement_strings(
        ["good>=1.0", "=== broken ===", "also-good"],
        &rich(),
    );
    assert_eq!(outcome.declarations.len(), 2);
    assert_eq!(outcome.warnings.len(), 1);
}

#[test]
fn test_rendered_block_substitutes_rpm_names() {
    let outcome = convert::from_requirement_strings(["flask>=1.0", "zope.interface"], &rich());
    let renderer = SpecRenderer::new(NameConverter::new("fedora"), Some("3".to_string()));
    let block = renderer.render_dependency_block(&outcome.declarations);
    assert!(block.contains("Requires:       python3-flask >= 1.0"));
    assert!(block.contains("python3-zope-interface"));
    assert!(!block.contains("{name}"));
}

#[tokio::test]
async fn test_orchestrator_local_pyproject() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pyproject.toml");
    fs::write(
        &path,
        r#"[build-system]
requires = ["setuptools>=61.0"]

[project]
name = "demo"
version = "2.1.0"
dependencies = ["flask>=1.0", "six"]
"#,
    )
    .unwrap();

    let args = CliArgs::parse_from(["py2rpm", "--local", path.to_str().unwrap()]);
    let result = Orchestrator::new(args).unwrap().run().await.unwrap();

    assert_eq!(result.metadata.name, "demo");
    assert_eq!(result.declarations.len(), 3);
    assert!(result.warnings.is_empty());
    assert!(result
        .declarations
        .iter()
        .any(|d| d.kind == DeclarationKind::BuildRequires && d.name == "setuptools"));
}

#[tokio::test]
async fn test_orchestrator_missing_local_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let args = CliArgs::parse_from(["py2rpm", "--local", path.to_str().unwrap()]);
    let err = Orchestrator::new(args).unwrap().run().await.unwrap_err();
    assert!(format!("{}", err).contains("not found"));
}
