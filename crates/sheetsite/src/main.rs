//! sheetsite CLI - build a static chart dashboard from a spreadsheet.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use sheetsite_static::{BuildResult, SiteBuilder};
use tracing_subscriber::{fmt, EnvFilter};

mod config;

#[derive(Parser)]
#[command(name = "sheetsite")]
#[command(about = "Build a static chart dashboard from a spreadsheet")]
#[command(version)]
pub struct Cli {
    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr; stdout carries only the confirmation line
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let line = run(&cli)?;
    println!("{line}");

    Ok(())
}

/// Load the config, build the site and return the confirmation line.
fn run(cli: &Cli) -> Result<String> {
    let site_config = config::load_config(&cli.config)?;
    let result = SiteBuilder::new(site_config).build()?;

    tracing::debug!(
        "Charted {} rows in {}ms (seeded: {})",
        result.rows,
        result.duration_ms,
        result.seeded
    );

    Ok(confirmation(&result))
}

fn confirmation(result: &BuildResult) -> String {
    format!("Built site → {}", result.output_path.display())
}
