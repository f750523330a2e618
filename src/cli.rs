//! CLI domain: parse, route, help, output, and presentation only.
//! No domain orchestration; single route table dispatches to domain services.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::{command_name, summary_descriptor};
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_apps_result_json, format_apps_result_text, format_domains_result_json,
    format_domains_result_text, format_routes_result_json, format_routes_result_text,
    format_spaces_result_full_text, format_spaces_result_json, format_spaces_result_text,
    format_target_set_text, format_target_text,
};
pub use route::RunContext;
