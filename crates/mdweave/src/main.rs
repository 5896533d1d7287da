//! mdweave CLI - converts commented source files to Markdown.
//!
//! For each listed source file, comment text becomes prose, code becomes
//! fenced blocks, and media referenced from comments is copied into the
//! output directory next to the generated document.

mod error;
mod media;
mod output;
mod pipeline;

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use mdweave_config::{CliSettings, Config};

use crate::error::CliError;
use crate::output::Output;

/// mdweave - commented-source to Markdown converter.
#[derive(Parser)]
#[command(name = "mdweave", version, about)]
struct Cli {
    /// Source files to convert.
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output directory for generated Markdown and copied media.
    #[arg(long)]
    outdir: Option<PathBuf>,

    /// Do not copy referenced media to the output directory.
    #[arg(long)]
    nocopy: bool,

    /// Path to configuration file (default: auto-discover mdweave.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(&cli, &output) {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}

/// Process all listed files in order. The first failure aborts the run.
fn run(cli: &Cli, output: &Output) -> Result<(), CliError> {
    let settings = CliSettings {
        outdir: cli.outdir.clone(),
        copy_media: cli.nocopy.then_some(false),
    };
    let config = Config::load(cli.config.as_deref(), Some(&settings))?;

    for file in &cli.files {
        output.info(&format!("Converting {}", file.display()));
        pipeline::convert_file(file, &config, output)?;
    }
    output.success("Done.");
    Ok(())
}
