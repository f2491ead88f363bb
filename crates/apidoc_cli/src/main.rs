//! apidoc: API documentation generators
//!
//! Usage:
//!   apidoc jsca [options] <INPUT>...
//!
//! Inputs are JSON files (or directories of them) holding the documented
//! API records. Logging goes to stderr and is filtered by `APIDOC_LOG`.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod config;
mod jsca;
mod loader;

#[derive(Parser, Debug)]
#[command(
    name = "apidoc",
    version,
    about = "Generate IDE code-assist data from API documentation"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the JSCA code-assist document (api.jsca)
    Jsca(jsca::JscaArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Jsca(args) => {
            init_logging(args.verbose);
            jsca::run(args)
        }
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::EnvFilter;
    let filter = if verbose {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_env("APIDOC_LOG").unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
