//! py2rpm binary entry point

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use py2rpm::cli::CliArgs;
use py2rpm::orchestrator::Orchestrator;
use py2rpm::render::{NameConverter, SpecRenderer};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    if args.verbose {
        if let Some(package) = &args.package {
            eprintln!("Converting '{}' for {}", package, args.distro);
        } else if let Some(path) = &args.local {
            eprintln!("Converting {} for {}", path.display(), args.distro);
        }
    }

    let renderer = SpecRenderer::new(
        NameConverter::new(args.distro.clone()),
        Some(args.python_version.clone()),
    );

    let orchestrator = Orchestrator::new(args.clone())?;
    let result = orchestrator.run().await?;

    if !args.quiet {
        for warning in &result.warnings {
            eprintln!("{} {}", "warning:".yellow().bold(), warning);
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result.declarations)?);
    } else if args.spec {
        print!(
            "{}",
            renderer.render_spec_skeleton(&result.metadata, &result.declarations)
        );
    } else {
        let block = renderer.render_dependency_block(&result.declarations);
        if !block.is_empty() {
            println!("{}", block);
        }
    }

    Ok(())
}
