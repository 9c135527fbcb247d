//! DocHarvest - Comment extraction and code association tool
//!
//! Extracts comments from source files, merges banner runs into logical
//! comments, and ties each comment to the syntax node it documents.

use anyhow::Result;
use docharvest::cli::{
    extract, inspect, languages, print_comments_json, print_comments_text, Cli, Commands,
    OutputFormat,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse_args();

    // Setup logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    // Execute command
    match cli.command {
        Commands::Extract(args) => {
            let reports = extract(&args)?;

            match cli.format {
                OutputFormat::Json => print_comments_json(&reports)?,
                OutputFormat::Text => print_comments_text(&reports),
            }
        }

        Commands::Inspect(args) => {
            inspect(&args)?;
        }

        Commands::Languages(_args) => {
            languages(cli.format)?;
        }
    }

    Ok(())
}
