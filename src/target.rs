//! Target command service: show and set the API endpoint.
//!
//! Setting a target is the single point where the data-model generation is
//! resolved: the endpoint's reported version picks routable or legacy, and
//! the result is persisted so later commands never re-probe.

use crate::api::http::fetch_target_info;
use crate::api::ApiVersion;
use crate::config::{ConfigLoader, NimbusConfig, TargetConfig};
use crate::error::ApiError;
use std::path::Path;

pub struct TargetCommandService;

/// Result of setting the target.
#[derive(Debug, Clone)]
pub struct TargetSetResult {
    pub url: String,
    pub platform_name: Option<String>,
    pub api_version: ApiVersion,
}

impl TargetCommandService {
    /// Fetch `/info` from the endpoint, derive the generation, and persist
    /// the new target. Token/organization/space survive a re-target of the
    /// same endpoint; pointing at a different endpoint drops them unless
    /// given again.
    pub async fn set(
        config: &mut NimbusConfig,
        config_path: &Path,
        url: &str,
        token: Option<&str>,
        organization: Option<&str>,
        space: Option<&str>,
    ) -> Result<TargetSetResult, ApiError> {
        let url = url.trim_end_matches('/').to_string();
        let info = fetch_target_info(&url).await?;
        let api_version = if info.version >= 2 {
            ApiVersion::Routable
        } else {
            ApiVersion::Legacy
        };

        let previous = config.target.take().filter(|t| t.url == url);
        let target = TargetConfig {
            url: url.clone(),
            token: token
                .map(String::from)
                .or_else(|| previous.as_ref().and_then(|t| t.token.clone())),
            organization: organization
                .map(String::from)
                .or_else(|| previous.as_ref().and_then(|t| t.organization.clone())),
            space: space
                .map(String::from)
                .or_else(|| previous.as_ref().and_then(|t| t.space.clone())),
            api_version,
        };
        config.target = Some(target);
        ConfigLoader::save(config, config_path)?;

        Ok(TargetSetResult {
            url,
            platform_name: info.name,
            api_version,
        })
    }
}
