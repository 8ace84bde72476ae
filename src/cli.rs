//! CLI argument parsing module for py2rpm

use crate::error::ConfigError;
use clap::Parser;
use std::path::PathBuf;

/// Converts Python package dependency metadata into RPM declarations
#[derive(Parser, Debug, Clone)]
#[command(
    name = "py2rpm",
    version,
    about = "Converts Python package dependency metadata into RPM declarations"
)]
pub struct CliArgs {
    /// Package name to fetch from PyPI (omit when using --local)
    pub package: Option<String>,

    /// Convert a specific release instead of the latest one
    #[arg(long)]
    pub pkg_version: Option<String>,

    /// Read metadata from a local pyproject.toml instead of PyPI
    #[arg(long)]
    pub local: Option<PathBuf>,

    /// Target distribution (affects rich-dependency support and naming)
    #[arg(long, default_value = "fedora")]
    pub distro: String,

    /// Python interpreter version used for package naming
    #[arg(long, default_value = "3")]
    pub python_version: String,

    /// Emit runtime dependencies as build-time declarations
    #[arg(long)]
    pub build_deps: bool,

    /// Force legacy (non-rich) dependency expressions
    #[arg(long)]
    pub no_rich_deps: bool,

    /// Emit a full spec-file skeleton instead of the dependency block
    #[arg(long)]
    pub spec: bool,

    /// Output the declaration list as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Enable quiet mode - suppress warnings
    #[arg(short, long)]
    pub quiet: bool,
}

impl CliArgs {
    /// Validates option combinations
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.package.is_none() && self.local.is_none() {
            return Err(ConfigError::MissingInput);
        }
        if self.package.is_some() && self.local.is_some() {
            return Err(ConfigError::ConflictingOptions {
                message: "a package name and --local cannot be used together".to_string(),
            });
        }
        if self.local.is_some() && self.pkg_version.is_some() {
            return Err(ConfigError::ConflictingOptions {
                message: "--pkg-version has no effect with --local".to_string(),
            });
        }
        if self.json && self.spec {
            return Err(ConfigError::ConflictingOptions {
                message: "--json and --spec cannot be used together".to_string(),
            });
        }
        Ok(())
    }

    /// Whether rich dependency expressions should be used
    pub fn use_rich_deps(&self) -> bool {
        !self.no_rich_deps
            && crate::convert::ConvertOptions::for_distro(&self.distro, true).rich_deps
    }
}
