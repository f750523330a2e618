//! Presentation: text and JSON formatters for command results.

mod apps;
mod routes;
mod spaces;
mod target;

pub use apps::{format_apps_result_json, format_apps_result_text};
pub use routes::{format_routes_result_json, format_routes_result_text};
pub use spaces::{
    format_domains_result_json, format_domains_result_text, format_spaces_result_full_text,
    format_spaces_result_json, format_spaces_result_text,
};
pub use target::{format_target_set_text, format_target_text};
