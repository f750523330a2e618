//! Route listing presentation.

use crate::routes::RoutesListResult;
use serde_json::json;

pub fn format_routes_result_text(result: &RoutesListResult) -> String {
    if result.routes.is_empty() {
        return "No routes found.".to_string();
    }
    use comfy_table::Table;
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["host", "domain"]);
    for route in &result.routes {
        table.add_row(vec![route.host.clone(), route.domain.name.clone()]);
    }
    format!("\n{}", table)
}

pub fn format_routes_result_json(result: &RoutesListResult) -> String {
    let routes: Vec<_> = result
        .routes
        .iter()
        .map(|route| {
            json!({
                "host": route.host,
                "domain": route.domain.name,
                "url": route.url(),
            })
        })
        .collect();
    let out = json!({ "routes": routes, "total": result.routes.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
