//! Nimbus: command-line client for the Nimbus cloud application platform.
//!
//! Each subcommand is a thin adapter from CLI inputs to one or two calls
//! against the platform's REST API, with progress and tabular output.

pub mod api;
pub mod apps;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod progress;
pub mod prompt;
pub mod routes;
pub mod spaces;
pub mod target;
