//! Target presentation: current target and set-target confirmation.

use crate::api::ApiVersion;
use crate::config::TargetConfig;
use crate::target::TargetSetResult;

pub fn format_target_text(target: Option<&TargetConfig>) -> String {
    let Some(target) = target else {
        return "No target set. Run `nimbus target <url>` to set one.".to_string();
    };
    let mut output = format!("Target: {}\n", target.url);
    output.push_str(&format!(
        "API generation: {}\n",
        generation_slug(target.api_version)
    ));
    if let Some(org) = &target.organization {
        output.push_str(&format!("Organization: {}\n", org));
    }
    if let Some(space) = &target.space {
        output.push_str(&format!("Space: {}\n", space));
    }
    output.push_str(&format!(
        "Token: {}\n",
        if target.token.is_some() { "set" } else { "not set" }
    ));
    output
}

pub fn format_target_set_text(result: &TargetSetResult) -> String {
    let platform = result.platform_name.as_deref().unwrap_or("platform");
    format!(
        "Target set to {} ({}, {} API)",
        result.url,
        platform,
        generation_slug(result.api_version)
    )
}

fn generation_slug(version: ApiVersion) -> &'static str {
    match version {
        ApiVersion::Routable => "routable",
        ApiVersion::Legacy => "legacy",
    }
}
