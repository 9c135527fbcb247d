//! CLI interface using clap
//!
//! Provides the command-line interface for DocHarvest

mod commands;

pub use commands::*;

use clap::{Parser, Subcommand};

/// DocHarvest - Comment extraction and code association tool
#[derive(Parser, Debug)]
#[command(name = "docharvest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
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
    /// Extract comments from files or directories
    Extract(ExtractArgs),

    /// Show a detailed per-comment report for one file
    Inspect(InspectArgs),

    /// List supported languages and their comment syntax
    Languages(LanguagesArgs),
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Arguments for extract command
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// Files or directories to extract comments from
    #[arg(required = true)]
    pub paths: Vec<String>,

    /// Force a language instead of detecting it from file extensions
    #[arg(short, long)]
    pub language: Option<String>,

    /// Do not merge adjacent single-line comments into banners
    #[arg(long)]
    pub no_merge: bool,

    /// Skip the association pass (no syntax tree is built)
    #[arg(long)]
    pub no_associate: bool,

    /// Only report comments associated with a syntax node
    #[arg(long)]
    pub associated_only: bool,
}

/// Arguments for inspect command
#[derive(Parser, Debug)]
pub struct InspectArgs {
    /// File to inspect
    pub file: String,

    /// Force a language instead of detecting it from the file extension
    #[arg(short, long)]
    pub language: Option<String>,
}

/// Arguments for languages command
#[derive(Parser, Debug)]
pub struct LanguagesArgs {}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
