//! codebox - Extract code blocks from rendered chapters
//!
//! Reads every rendered chapter page of a site and writes its
//! `<pre><code>` blocks out as standalone scripts.

use anyhow::Result;
use codebox::cli::{
    config, extract, list, print_report_json, print_report_text, Cli, Commands, OutputFormat,
};
use std::path::Path;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Logs go to stderr so reports on stdout stay machine-readable
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let site_path = Path::new(&cli.path);

    match cli.command {
        Commands::Extract(args) => {
            let report = extract(site_path, &args)?;

            match cli.format {
                OutputFormat::Json => print_report_json(&report)?,
                OutputFormat::Text => print_report_text(&report),
            }
        }

        Commands::List(args) => {
            let report = list(site_path, &args)?;

            match cli.format {
                OutputFormat::Json => print_report_json(&report)?,
                OutputFormat::Text => print_report_text(&report),
            }
        }

        Commands::Config(args) => {
            config(site_path, &args)?;
        }
    }

    Ok(())
}
