//! CLI commands and argument parsing

use crate::types::CredentialSource;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Paginating search proxy
#[derive(Parser, Debug)]
#[command(name = "places-proxy")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the page cap
    #[arg(long, global = true)]
    pub max_pages: Option<u32>,

    /// Override the upstream search endpoint
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server mode
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Where callers supply the provider credential
        #[arg(long, value_enum)]
        credential_source: Option<CredentialSource>,
    },

    /// Run one aggregated search and print the result
    Search {
        /// Search term
        #[arg(short, long)]
        query: String,

        /// Coordinate hint, e.g. "@40.7455096,-74.0083012,14z"
        #[arg(long)]
        coordinates: Option<String>,

        /// Provider API key
        #[arg(long)]
        api_key: String,
    },

    /// Print the effective configuration
    Config,
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Compact JSON
    Json,
    /// Indented JSON
    Pretty,
}
