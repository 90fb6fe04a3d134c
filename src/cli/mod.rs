//! CLI module
//!
//! Command-line interface for the proxy.
//!
//! # Commands
//!
//! - `serve` - Start HTTP server mode
//! - `search` - Run one aggregated search and print the payload
//! - `config` - Print the effective configuration

mod commands;
mod runner;
mod server;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
pub use server::{router, serve, AppState};
