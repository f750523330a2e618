//! Configuration System
//!
//! Persistent client configuration: the API target (endpoint, credentials,
//! scope, data-model generation) and logging settings. Loaded from a TOML
//! file under the user config directory with NIMBUS_* environment overrides.

use crate::api::ApiVersion;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod loader;

pub use loader::ConfigLoader;

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NimbusConfig {
    /// Current API target; absent until `nimbus target <url>` is run.
    pub target: Option<TargetConfig>,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// One API target: endpoint, credentials, scope, and the data-model
/// generation resolved when the target was set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetConfig {
    /// API endpoint URL, without a trailing slash.
    pub url: String,

    /// Bearer token for authenticated requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    /// Organization guid scoping `nimbus spaces`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,

    /// Space guid scoping lookups and route creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub space: Option<String>,

    /// Routable or legacy, from the endpoint's reported version.
    #[serde(default = "default_api_version")]
    pub api_version: ApiVersion,
}

fn default_api_version() -> ApiVersion {
    ApiVersion::Routable
}
