//! Package index adapters
//!
//! The converter only needs one thing from an index: release metadata for
//! (name, optional version). The [`MetadataSource`] trait is that seam;
//! PyPI is the one production implementation.

mod client;
mod pypi;

pub use client::HttpClient;
pub use pypi::PypiClient;

use crate::error::RegistryError;
use crate::metadata::PackageMetadata;
use async_trait::async_trait;

/// A remote source of package release metadata
#[async_trait]
pub trait MetadataSource {
    /// Human-readable source name for error messages
    fn source_name(&self) -> &'static str;

    /// Fetch metadata for a package, latest release when `version` is None
    async fn fetch_metadata(
        &self,
        package: &str,
        version: Option<&str>,
    ) -> Result<PackageMetadata, RegistryError>;
}
