//! JSCA generation command for apidoc CLI
//!
//! This module provides the `apidoc jsca` command, which loads the documented
//! API records and writes the JSCA code-assist document.

use crate::config::ApidocConfig;
use crate::loader::load_registry;
use anyhow::{Context, Result};
use apidoc_jsca::{JscaBuilder, JscaConfig};
use clap::Args;
use std::path::{Path, PathBuf};
use tracing::info;

/// Dist directory used when neither the flag nor the config sets one
pub const DEFAULT_DIST_DIR: &str = "dist";

/// Arguments of `apidoc jsca`
#[derive(Args, Debug)]
pub struct JscaArgs {
    /// API record JSON files, or directories searched for them
    #[arg(value_name = "INPUT", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Directory api.jsca is written to
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Write the document to stdout
    #[arg(long)]
    pub stdout: bool,

    /// Log every converted type and function
    #[arg(short, long)]
    pub verbose: bool,

    /// Configuration file (defaults to ./apidoc.toml when present)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dist directory; api.jsca goes to <DIR>/apidoc when no output is given
    #[arg(long, value_name = "DIR")]
    pub dist: Option<PathBuf>,

    /// Leave a type out of the document (repeatable)
    #[arg(long = "exclude-type", value_name = "NAME")]
    pub exclude_types: Vec<String>,
}

/// Run the jsca command
pub fn run(args: JscaArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => ApidocConfig::from_file(path)?,
        None => ApidocConfig::discover(Path::new("."))?,
    };

    let registry = load_registry(&args.inputs)?;
    info!("Loaded {} types", registry.len());

    let output = builder_for(&args, &config)
        .build(&registry)
        .context("Failed to generate JSCA")?;
    if let Some(path) = &output.path {
        info!(
            "Wrote {} types ({} bytes) to {}",
            output.type_count,
            output.bytes,
            path.display()
        );
    }
    Ok(())
}

/// Merge flags over file settings; flags win
fn builder_for(args: &JscaArgs, config: &ApidocConfig) -> JscaBuilder {
    let mut jsca = JscaConfig::new();
    if let Some(indent) = &config.jsca.indent {
        jsca = jsca.with_indent(indent.clone());
    }
    for name in config.jsca.exclude_types.iter().chain(&args.exclude_types) {
        jsca = jsca.exclude_type(name.clone());
    }

    let output_dir = args.output.clone().or_else(|| config.output.dir.clone());
    let stdout = args.stdout || (args.output.is_none() && config.output.stdout.unwrap_or(false));
    let dist = args
        .dist
        .clone()
        .or_else(|| config.output.dist.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DIST_DIR));

    let mut builder = JscaBuilder::new().config(jsca).stdout(stdout).dist_dir(dist);
    if let Some(dir) = output_dir {
        builder = builder.output_dir(dir);
    }
    builder
}
