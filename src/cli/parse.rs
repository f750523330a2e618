//! CLI parse: clap types for Nimbus. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Nimbus CLI - command-line client for the Nimbus cloud application platform
#[derive(Parser)]
#[command(name = "nimbus")]
#[command(about = "Command-line client for the Nimbus cloud application platform")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Disable logging output
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show or set the API endpoint
    Target {
        /// API endpoint URL (omit to show the current target)
        url: Option<String>,

        /// Authentication token to store with the target
        #[arg(long)]
        token: Option<String>,

        /// Organization guid scoping space listings
        #[arg(long)]
        organization: Option<String>,

        /// Space guid scoping lookups and route creation
        #[arg(long)]
        space: Option<String>,
    },
    /// Add a URL mapping for an app
    Map {
        /// Application to add the URL to
        app: String,

        /// URL to map to the application
        url: String,
    },
    /// Remove a URL mapping from an app
    Unmap {
        /// Application to remove the URL from
        app: String,

        /// URL to unmap (omit to choose interactively)
        url: Option<String>,
    },
    /// List applications in the current space
    Apps {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List routes in the current space
    Routes {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List domains in the current space
    Domains {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// List spaces in the target organization
    Spaces {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,

        /// Show full details for each space
        #[arg(long)]
        full: bool,
    },
}
