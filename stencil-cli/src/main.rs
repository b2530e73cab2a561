//! Stencil — manifest-driven template content generation CLI.
//!
//! # Usage
//!
//! ```text
//! stencil <manifest.json>
//! ```
//!
//! The manifest describes a tree of files to generate: a template search
//! root, named models, and nested output directories. Running with no
//! arguments prints usage and exits cleanly; any generation failure is
//! logged and the process exits non-zero.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use stencil_engine::{pipeline, TracingSink};
use stencil_renderer::TeraRenderer;

#[derive(Parser, Debug)]
#[command(
    name = "stencil",
    version,
    about = "Generate files from a template manifest",
    long_about = None,
)]
struct Cli {
    /// Path to the JSON manifest describing what to generate.
    pub manifest: Option<PathBuf>,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let Some(manifest_path) = cli.manifest else {
        Cli::command().print_help()?;
        return Ok(());
    };

    pipeline::run_manifest_path(&manifest_path, TeraRenderer::new(), TracingSink)
        .with_context(|| format!("generation failed for manifest {}", manifest_path.display()))?;
    Ok(())
}
