//! Application listing presentation.

use crate::apps::AppsListResult;
use serde_json::json;

pub fn format_apps_result_text(result: &AppsListResult) -> String {
    if result.apps.is_empty() {
        return "No applications found.".to_string();
    }
    use comfy_table::Table;
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["name", "state", "urls"]);
    for app in &result.apps {
        table.add_row(vec![app.name.clone(), app.state.clone(), app.urls.join(", ")]);
    }
    format!("\n{}", table)
}

pub fn format_apps_result_json(result: &AppsListResult) -> String {
    let apps: Vec<_> = result
        .apps
        .iter()
        .map(|app| {
            json!({
                "name": app.name,
                "state": app.state,
                "urls": app.urls,
            })
        })
        .collect();
    let out = json!({ "apps": apps, "total": result.apps.len() });
    serde_json::to_string_pretty(&out).unwrap_or_else(|_| "{}".to_string())
}
