//! PyPI JSON API adapter
//!
//! Fetches release metadata from https://pypi.org/pypi/{name}/json (or
//! .../{name}/{version}/json when a release is pinned) and normalizes it
//! into a [`PackageMetadata`] record.

use crate::error::RegistryError;
use crate::metadata::PackageMetadata;
use crate::registry::{HttpClient, MetadataSource};
use async_trait::async_trait;
use serde::Deserialize;

/// PyPI JSON API base URL
const PYPI_API_URL: &str = "https://pypi.org/pypi";

/// PyPI metadata adapter
pub struct PypiClient {
    client: HttpClient,
    base_url: String,
}

/// Top-level PyPI JSON response
#[derive(Debug, Deserialize)]
struct PypiResponse {
    info: PypiInfo,
}

/// The `info` object of a PyPI release
#[derive(Debug, Deserialize)]
struct PypiInfo {
    name: String,
    version: String,
    summary: Option<String>,
    license: Option<String>,
    requires_dist: Option<Vec<String>>,
}

impl PypiClient {
    /// Create a new PyPI client
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            base_url: PYPI_API_URL.to_string(),
        }
    }

    /// Create a client against a different index URL (for testing and
    /// private mirrors)
    pub fn with_base_url(client: HttpClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Build the metadata URL for a package, optionally pinned to a release
    fn build_url(&self, package: &str, version: Option<&str>) -> String {
        match version {
            Some(version) => format!("{}/{}/{}/json", self.base_url, package, version),
            None => format!("{}/{}/json", self.base_url, package),
        }
    }
}

#[async_trait]
impl MetadataSource for PypiClient {
    fn source_name(&self) -> &'static str {
        "PyPI"
    }

    async fn fetch_metadata(
        &self,
        package: &str,
        version: Option<&str>,
    ) -> Result<PackageMetadata, RegistryError> {
        let url = self.build_url(package, version);
        let response: PypiResponse = self
            .client
            .get_json(&url, package, self.source_name())
            .await?;

        Ok(PackageMetadata {
            name: response.info.name,
            version: response.info.version,
            summary: response.info.summary.filter(|s| !s.is_empty()),
            license: response.info.license.filter(|s| !s.is_empty()),
            requires_dist: response.info.requires_dist.unwrap_or_default(),
            // PyPI JSON metadata does not expose build requirements
            build_requires: Vec::new(),
        })
    }
}
