//! CLI help: stable command names and one-line descriptors for log summaries.

use crate::cli::parse::Commands;

/// Stable command name for log lines.
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Target { .. } => "target",
        Commands::Map { .. } => "map",
        Commands::Unmap { .. } => "unmap",
        Commands::Apps { .. } => "apps",
        Commands::Routes { .. } => "routes",
        Commands::Domains { .. } => "domains",
        Commands::Spaces { .. } => "spaces",
    }
    .to_string()
}

/// One-line descriptor of the invocation, for log summaries.
pub fn summary_descriptor(command: &Commands) -> String {
    match command {
        Commands::Target { url: Some(url), .. } => format!("target {}", url),
        Commands::Target { url: None, .. } => "target".to_string(),
        Commands::Map { app, url } => format!("map {} {}", app, url),
        Commands::Unmap { app, url: Some(url) } => format!("unmap {} {}", app, url),
        Commands::Unmap { app, url: None } => format!("unmap {}", app),
        Commands::Spaces { full: true, .. } => "spaces --full".to_string(),
        other => command_name(other),
    }
}
