//! Space and domain listing presentation.

use crate::spaces::{DomainsListResult, SpacesListResult};
use serde_json::json;

/// Tabular space listing: name, apps, services. Empty input yields an empty
/// string so only the progress line is shown.
pub fn format_spaces_result_text(result: &SpacesListResult) -> String {
    if result.spaces.is_empty() {
        return String::new();
    }
    use comfy_table::Table;
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["name", "apps", "services"]);
    for space in &result.spaces {
        table.add_row(vec![
            space.name.clone(),
            space.app_names.join(", "),
            space.service_names.join(", "),
        ]);
    }
    format!("\n{}", table)
}

/// Per-space detail blocks for `spaces --full`.
pub fn format_spaces_result_full_text(result: &SpacesListResult) -> String {
    let mut output = String::new();
    for space in &result.spaces {
        output.push_str(&format!("\n{}:\n", space.name));
        output.push_str(&format!("  apps: {}\n", join_or_none(&space.app_names)));
        output.push_str(&format!(
            "  services: {}\n",
            join_or_none(&space.service_names)
        ));
        output.push_str(&format!(
            "  domains: {}\n",
            join_or_none(&space.domain_names)
        ));
    }
    output
}

pub fn format_spaces_result_json(result: &SpacesListResult) -> String {
    let spaces: Vec<_> = result
        .spaces
        .iter()
        .map(|space| {
            json!({
                "name": space.name,
                "apps": space.app_names,
                "services": space.service_names,
                "domains": space.domain_names,
            })
        })
        .collect();
    let out = json!({ "spaces": spaces, "total": result.spaces.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

pub fn format_domains_result_text(result: &DomainsListResult) -> String {
    if result.domains.is_empty() {
        return "No domains found.".to_string();
    }
    let mut output = String::from("Domains:\n");
    for domain in &result.domains {
        output.push_str(&format!("  {}\n", domain.name));
    }
    output.push_str(&format!("\nTotal: {} domain(s)\n", result.domains.len()));
    output
}

pub fn format_domains_result_json(result: &DomainsListResult) -> String {
    let domains: Vec<_> = result
        .domains
        .iter()
        .map(|d| json!({ "name": d.name, "guid": d.guid }))
        .collect();
    let out = json!({ "domains": domains, "total": result.domains.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}

fn join_or_none(names: &[String]) -> String {
    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(", ")
    }
}
