//! Conversion orchestration
//!
//! Wires the pieces together: resolve metadata (local pyproject.toml or
//! package index), build the build-time and runtime declaration lists, and
//! hand the combined result to the caller for rendering.

use crate::cli::CliArgs;
use crate::convert::{self, BuildOutcome, ConvertOptions};
use crate::domain::Declaration;
use crate::error::AppError;
use crate::metadata::{extract_pyproject, PackageMetadata};
use crate::registry::{HttpClient, MetadataSource, PypiClient};

/// Everything a conversion run produced
#[derive(Debug)]
pub struct ConversionResult {
    /// Metadata the declarations were derived from
    pub metadata: PackageMetadata,
    /// Combined build-time and runtime declarations
    pub declarations: Vec<Declaration>,
    /// Warnings for entries that were skipped
    pub warnings: Vec<String>,
}

/// Drives a single conversion run
pub struct Orchestrator<S: MetadataSource> {
    args: CliArgs,
    source: Option<S>,
}

impl Orchestrator<PypiClient> {
    /// Creates an orchestrator backed by the production package index.
    /// Local conversions never touch the network, so the index client is
    /// only built when no local path is given.
    pub fn new(args: CliArgs) -> Result<Self, AppError> {
        let source = if args.local.is_none() {
            Some(PypiClient::new(HttpClient::new()?))
        } else {
            None
        };
        Ok(Self { args, source })
    }
}

impl<S: MetadataSource> Orchestrator<S> {
    /// Creates an orchestrator with an explicit metadata source
    pub fn with_source(args: CliArgs, source: S) -> Self {
        Self {
            args,
            source: Some(source),
        }
    }

    /// Runs the conversion end to end
    pub async fn run(&self) -> Result<ConversionResult, AppError> {
        self.args.validate()?;
        let metadata = self.resolve_metadata().await?;
        let (declarations, warnings) = self.build_declarations(&metadata);
        Ok(ConversionResult {
            metadata,
            declarations,
            warnings,
        })
    }

    async fn resolve_metadata(&self) -> Result<PackageMetadata, AppError> {
        if let Some(path) = &self.args.local {
            return Ok(extract_pyproject(path)?);
        }
        // validate() guarantees a package name when --local is absent
        let package = self.args.package.as_deref().unwrap_or_default();
        let source = self
            .source
            .as_ref()
            .ok_or(crate::error::ConfigError::MissingInput)?;
        let metadata = source
            .fetch_metadata(package, self.args.pkg_version.as_deref())
            .await?;
        Ok(metadata)
    }

    fn build_declarations(&self, metadata: &PackageMetadata) -> (Vec<Declaration>, Vec<String>) {
        let rich_deps = self.args.use_rich_deps();
        // --build-deps routes the runtime list to build-time tags
        let runtime = !self.args.build_deps;

        let mut outcome = BuildOutcome::default();
        outcome.merge(convert::from_requirement_strings(
            &metadata.build_requires,
            &ConvertOptions::new(false, rich_deps),
        ));
        outcome.merge(convert::from_requirement_strings(
            &metadata.requires_dist,
            &ConvertOptions::new(runtime, rich_deps),
        ));
        (outcome.declarations, outcome.warnings)
    }
}
