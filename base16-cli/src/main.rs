//! base16-builder — render every base16 scheme through every template.
//!
//! # Usage
//!
//! ```text
//! base16-builder            fetch schemes into a new temp dir, then render
//! base16-builder <DIR>      render schemes already present in <DIR>
//! ```
//!
//! Templates are read from `./templates/config.yaml` and
//! `./templates/<name>.mustache`. Fetching is tuned through the environment;
//! see [`settings`].

mod commands;
mod settings;

use anyhow::Result;
use clap::Parser;

use commands::build::BuildArgs;
use settings::Settings;

// ---------------------------------------------------------------------------
// CLI entry point
// ---------------------------------------------------------------------------

#[derive(Parser, Debug)]
#[command(
    name = "base16-builder",
    version,
    about = "Render base16 color schemes through a set of templates",
    long_about = None,
)]
struct Cli {
    #[command(flatten)]
    build: BuildArgs,
}

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();
    let settings = Settings::from_env()?;
    cli.build.run(&settings)
}

/// Diagnostics go to stderr; stdout carries progress and the summary only.
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
