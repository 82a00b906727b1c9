//! GymStore CLI
//!
//! Command-line tools for GymStore bulk-load documents.
//!
//! # Commands
//!
//! - `inspect` - Load a document and display per-namespace statistics
//! - `verify` - List skipped entries; fails if any
//! - `credentials` - Preview the credentials a new account would receive

mod commands;

use clap::{Parser, Subcommand};
use gymstore_core::StoreConfig;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// GymStore command-line document tools.
#[derive(Parser)]
#[command(name = "gymstore")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the bulk-load document (defaults to $GYMSTORE_INIT_FILE)
    #[arg(global = true, short, long)]
    path: Option<PathBuf>,

    /// Accept entries with undeclared fields
    #[arg(global = true, long)]
    lenient: bool,

    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a document and display statistics
    Inspect {
        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Verify that every document entry loads
    Verify,

    /// Preview credentials for a new account
    Credentials {
        /// First name
        #[arg(long)]
        first: String,

        /// Last name
        #[arg(long)]
        last: String,

        /// Output format (text, json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = StoreConfig::from_env();
    if let Some(path) = cli.path {
        config = config.init_file(path);
    }
    if cli.lenient {
        config = config.strict_fields(false);
    }

    match cli.command {
        Commands::Inspect { format } => {
            let path = config
                .init_file
                .as_deref()
                .ok_or("Document path required for inspect")?;
            commands::inspect::run(path, &config, &format)?;
        }
        Commands::Verify => {
            let path = config
                .init_file
                .as_deref()
                .ok_or("Document path required for verify")?;
            commands::verify::run(path, &config)?;
        }
        Commands::Credentials {
            first,
            last,
            format,
        } => {
            commands::credentials::run(
                config.init_file.as_deref(),
                &config,
                &first,
                &last,
                &format,
            )?;
        }
        Commands::Version => {
            println!("GymStore CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("GymStore Core v{}", gymstore_core::VERSION);
        }
    }

    Ok(())
}
