//! Spec-file text rendering
//!
//! Turns the declaration list into spec-file dependency lines, substituting
//! the `{name}` placeholder with the converted RPM package name, and can
//! wrap those lines in a minimal generated-spec skeleton. Unknown metadata
//! fields degrade to visible `TODO:` markers for the packager to fill in.

use crate::domain::{Declaration, RpmVersion, NAME_PLACEHOLDER};
use crate::metadata::PackageMetadata;
use crate::render::NameConverter;
use chrono::Utc;

/// Column width of the spec-file tag field
const TAG_WIDTH: usize = 16;

/// Renders declarations into spec-file text
pub struct SpecRenderer {
    name_converter: NameConverter,
    python_version: Option<String>,
}

impl SpecRenderer {
    /// Creates a renderer
    pub fn new(name_converter: NameConverter, python_version: Option<String>) -> Self {
        Self {
            name_converter,
            python_version,
        }
    }

    /// Renders one declaration as a spec-file line
    pub fn render_declaration(&self, declaration: &Declaration) -> String {
        let rpm_name = self
            .name_converter
            .rpm_name(&declaration.name, self.python_version.as_deref());
        let expression = declaration.expression.replace(NAME_PLACEHOLDER, &rpm_name);
        format!(
            "{:<width$}{}",
            format!("{}:", declaration.kind),
            expression,
            width = TAG_WIDTH
        )
    }

    /// Renders the whole dependency block, one line per declaration
    pub fn render_dependency_block(&self, declarations: &[Declaration]) -> String {
        declarations
            .iter()
            .map(|declaration| self.render_declaration(declaration))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Renders a minimal spec-file skeleton around the dependency block
    pub fn render_spec_skeleton(
        &self,
        metadata: &PackageMetadata,
        declarations: &[Declaration],
    ) -> String {
        let rpm_version = if metadata.version.is_empty() {
            "TODO: Version".to_string()
        } else {
            RpmVersion::parse(&metadata.version).to_string()
        };
        let summary = metadata.summary.as_deref().unwrap_or("TODO: Summary");
        let license = metadata.license.as_deref().unwrap_or("TODO: License");
        let package_name = self
            .name_converter
            .rpm_name(&metadata.name, self.python_version.as_deref());
        let date = Utc::now().format("%a %b %d %Y");

        let mut spec = String::new();
        spec.push_str(&format!("%global pypi_name {}\n\n", metadata.name));
        spec.push_str(&format!("{:<TAG_WIDTH$}{}\n", "Name:", package_name));
        spec.push_str(&format!("{:<TAG_WIDTH$}{}\n", "Version:", rpm_version));
        spec.push_str(&format!("{:<TAG_WIDTH$}1%{{?dist}}\n", "Release:"));
        spec.push_str(&format!("{:<TAG_WIDTH$}{}\n\n", "Summary:", summary));
        spec.push_str(&format!("{:<TAG_WIDTH$}{}\n", "License:", license));
        spec.push_str(&format!(
            "{:<TAG_WIDTH$}https://pypi.org/project/{}/\n",
            "URL:", metadata.name
        ));
        spec.push_str(&format!("{:<TAG_WIDTH$}%{{pypi_source}}\n\n", "Source0:"));

        if !declarations.is_empty() {
            spec.push_str(&self.render_dependency_block(declarations));
            spec.push_str("\n\n");
        }

        spec.push_str("%description\n");
        spec.push_str(summary);
        spec.push_str("\n\n%changelog\n");
        spec.push_str(&format!(
            "* {} py2rpm - {}-1\n- Initial package\n",
            date, rpm_version
        ));
        spec
    }
}
