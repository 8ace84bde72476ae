//! Package metadata sources
//!
//! The converter consumes one normalized [`PackageMetadata`] record per
//! package, regardless of where the metadata came from (local
//! pyproject.toml or the package index).

mod pyproject_toml;

pub use pyproject_toml::extract_pyproject;

/// Normalized package metadata fed into the dependency converter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageMetadata {
    /// Distribution name
    pub name: String,
    /// Release version string
    pub version: String,
    /// One-line description, if available
    pub summary: Option<String>,
    /// License identifier, if available
    pub license: Option<String>,
    /// Runtime requirement strings (PEP 508 syntax)
    pub requires_dist: Vec<String>,
    /// Build-time requirement strings (PEP 518 build-system requires)
    pub build_requires: Vec<String>,
}
