//! Application error types using thiserror
//!
//! Error hierarchy:
//! - MetadataError: issues with local package metadata extraction
//! - RegistryError: issues with package index communication
//! - ConfigError: issues with CLI configuration
//!
//! Constraint-translation failures are deliberately NOT errors: they
//! degrade to the `Invalid version` sentinel inside the generated text
//! (see `convert::translate`).

use std::path::PathBuf;
use thiserror::Error;

/// Application-level error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Local metadata extraction errors
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    /// Package index related errors
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Configuration related errors
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to local metadata files
#[derive(Error, Debug)]
pub enum MetadataError {
    /// Metadata file not found
    #[error("metadata file not found: {path}")]
    NotFound { path: PathBuf },

    /// Failed to read metadata file
    #[error("failed to read metadata file {path}: {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error (pyproject.toml)
    #[error("failed to parse TOML in {path}: {message}")]
    TomlParseError { path: PathBuf, message: String },

    /// A required metadata field is absent
    #[error("missing field '{field}' in {path}")]
    MissingField { path: PathBuf, field: String },
}

/// Errors related to package index communication
#[derive(Error, Debug)]
pub enum RegistryError {
    /// Package (or the requested release) not found on the index
    #[error("package '{package}' not found on {registry}")]
    PackageNotFound { package: String, registry: String },

    /// Network request failed
    #[error("failed to fetch '{package}' from {registry}: {message}")]
    NetworkError {
        package: String,
        registry: String,
        message: String,
    },

    /// Rate limit exceeded
    #[error("rate limit exceeded for {registry}")]
    RateLimitExceeded { registry: String },

    /// Invalid response payload
    #[error("invalid response from {registry} for '{package}': {message}")]
    InvalidResponse {
        package: String,
        registry: String,
        message: String,
    },

    /// Timeout
    #[error("timeout while fetching '{package}' from {registry}")]
    Timeout { package: String, registry: String },
}

/// Errors related to configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Mutually exclusive options given together
    #[error("conflicting options: {message}")]
    ConflictingOptions { message: String },

    /// Neither a package name nor a local metadata source was given
    #[error("no input: provide a package name or --local <pyproject.toml>")]
    MissingInput,
}

impl MetadataError {
    /// Creates a new NotFound error
    pub fn not_found(path: impl Into<PathBuf>) -> Self {
        MetadataError::NotFound { path: path.into() }
    }

    /// Creates a new ReadError
    pub fn read_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        MetadataError::ReadError {
            path: path.into(),
            source,
        }
    }

    /// Creates a new TomlParseError
    pub fn toml_parse_error(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        MetadataError::TomlParseError {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Creates a new MissingField error
    pub fn missing_field(path: impl Into<PathBuf>, field: impl Into<String>) -> Self {
        MetadataError::MissingField {
            path: path.into(),
            field: field.into(),
        }
    }
}

impl RegistryError {
    /// Creates a new PackageNotFound error
    pub fn package_not_found(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::PackageNotFound {
            package: package.into(),
            registry: registry.into(),
        }
    }

    /// Creates a new NetworkError
    pub fn network_error(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::NetworkError {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new InvalidResponse error
    pub fn invalid_response(
        package: impl Into<String>,
        registry: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        RegistryError::InvalidResponse {
            package: package.into(),
            registry: registry.into(),
            message: message.into(),
        }
    }

    /// Creates a new Timeout error
    pub fn timeout(package: impl Into<String>, registry: impl Into<String>) -> Self {
        RegistryError::Timeout {
            package: package.into(),
            registry: registry.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_error_not_found() {
        let err = MetadataError::not_found("/path/to/pyproject.toml");
        let msg = format!("{}", err);
        assert!(msg.contains("metadata file not found"));
        assert!(msg.contains("pyproject.toml"));
    }

    #[test]
    fn test_metadata_error_toml_parse() {
        let err = MetadataError::toml_parse_error("/p/pyproject.toml", "invalid key");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to parse TOML"));
        assert!(msg.contains("invalid key"));
    }

    #[test]
    fn test_metadata_error_missing_field() {
        let err = MetadataError::missing_field("/p/pyproject.toml", "project.name");
        let msg = format!("{}", err);
        assert!(msg.contains("missing field 'project.name'"));
    }

    #[test]
    fn test_registry_error_package_not_found() {
        let err = RegistryError::package_not_found("nonexistent", "PyPI");
        let msg = format!("{}", err);
        assert!(msg.contains("package 'nonexistent' not found"));
        assert!(msg.contains("PyPI"));
    }

    #[test]
    fn test_registry_error_network() {
        let err = RegistryError::network_error("flask", "PyPI", "connection refused");
        let msg = format!("{}", err);
        assert!(msg.contains("failed to fetch"));
        assert!(msg.contains("connection refused"));
    }

    #[test]
    fn test_registry_error_timeout() {
        let err = RegistryError::timeout("flask", "PyPI");
        let msg = format!("{}", err);
        assert!(msg.contains("timeout"));
        assert!(msg.contains("flask"));
    }

    #[test]
    fn test_config_error_missing_input() {
        let err = ConfigError::MissingInput;
        let msg = format!("{}", err);
        assert!(msg.contains("no input"));
    }

    #[test]
    fn test_app_error_from_metadata_error() {
        let err: AppError = MetadataError::not_found("/p").into();
        assert!(format!("{}", err).contains("metadata file not found"));
    }

    #[test]
    fn test_app_error_from_registry_error() {
        let err: AppError = RegistryError::package_not_found("pkg", "PyPI").into();
        assert!(format!("{}", err).contains("not found"));
    }

    #[test]
    fn test_app_error_from_config_error() {
        let err: AppError = ConfigError::MissingInput.into();
        assert!(format!("{}", err).contains("no input"));
    }
}
