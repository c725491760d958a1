//! CLI interface using clap
//!
//! Provides the command-line interface for codebox

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand};

/// codebox - Extract code blocks from rendered chapters into scripts
#[derive(Parser, Debug)]
#[command(name = "codebox")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the site root (defaults to current directory)
    #[arg(short, long, global = true, default_value = ".")]
    pub path: String,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write every chapter's code blocks out as scripts
    Extract(ExtractArgs),

    /// Show the scripts an extraction would write, without writing them
    List(ListArgs),

    /// Show or reset configuration
    Config(ConfigArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for extract command
#[derive(Parser, Debug, Default)]
pub struct ExtractArgs {
    /// Directory holding the rendered chapters
    #[arg(short, long, env = "CODEBOX_SOURCE")]
    pub source: Option<String>,

    /// Directory to write the scripts under
    #[arg(short = 'O', long, env = "CODEBOX_OUTPUT")]
    pub output: Option<String>,

    /// Keep the existing output root instead of removing it first
    #[arg(long)]
    pub no_clean: bool,

    /// Extension for the written scripts
    #[arg(short, long)]
    pub ext: Option<String>,
}

/// Arguments for list command
#[derive(Parser, Debug, Default)]
pub struct ListArgs {
    /// Directory holding the rendered chapters
    #[arg(short, long, env = "CODEBOX_SOURCE")]
    pub source: Option<String>,

    /// Directory the scripts would be written under
    #[arg(short = 'O', long, env = "CODEBOX_OUTPUT")]
    pub output: Option<String>,

    /// Extension for the listed scripts
    #[arg(short, long)]
    pub ext: Option<String>,
}

/// Arguments for config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Show current configuration
    #[arg(long)]
    pub show: bool,

    /// Get a configuration value
    #[arg(long)]
    pub get: Option<String>,

    /// Write the default configuration file
    #[arg(long)]
    pub reset: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
