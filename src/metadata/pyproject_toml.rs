//! Local pyproject.toml metadata extraction
//!
//! Reads the PEP 621 `[project]` table for name, version, summary, license
//! and runtime dependencies, and the PEP 518 `[build-system]` table for
//! build requirements.

use crate::error::MetadataError;
use crate::metadata::PackageMetadata;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct PyProject {
    project: Option<Project>,
    #[serde(rename = "build-system")]
    build_system: Option<BuildSystem>,
}

#[derive(Debug, Deserialize)]
struct Project {
    name: Option<String>,
    version: Option<String>,
    description: Option<String>,
    license: Option<License>,
    #[serde(default)]
    dependencies: Vec<String>,
}

/// PEP 621 allows both `license = "MIT"` and `license = { text = "MIT" }`
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum License {
    Text(String),
    Table { text: Option<String> },
}

impl License {
    fn into_text(self) -> Option<String> {
        match self {
            License::Text(text) => Some(text),
            License::Table { text } => text,
        }
    }
}

#[derive(Debug, Deserialize)]
struct BuildSystem {
    #[serde(default)]
    requires: Vec<String>,
}

/// Extracts package metadata from a pyproject.toml file
pub fn extract_pyproject(path: &Path) -> Result<PackageMetadata, MetadataError> {
    if !path.exists() {
        return Err(MetadataError::not_found(path));
    }
    let content =
        std::fs::read_to_string(path).map_err(|e| MetadataError::read_error(path, e))?;

    let pyproject: PyProject = toml::from_str(&content)
        .map_err(|e| MetadataError::toml_parse_error(path, e.to_string()))?;

    let project = pyproject
        .project
        .ok_or_else(|| MetadataError::missing_field(path, "project"))?;
    let name = project
        .name
        .ok_or_else(|| MetadataError::missing_field(path, "project.name"))?;
    // Dynamic versions need the build backend to resolve; treat as absent
    let version = project.version.unwrap_or_default();

    Ok(PackageMetadata {
        name,
        version,
        summary: project.description,
        license: project.license.and_then(License::into_text),
        requires_dist: project.dependencies,
        build_requires: pyproject
            .build_system
            .map(|bs| bs.requires)
            .unwrap_or_default(),
    })
}
