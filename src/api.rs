//! Platform API Abstraction
//!
//! Typed resource-access interface consumed by the command services. The
//! production implementation speaks the platform's REST API over HTTP; tests
//! substitute an in-memory fake. Every lookup the commands need is an
//! explicit query function here rather than a dynamic resource attribute.

use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub mod http;
pub mod resources;

pub use resources::{App, AppSummary, Domain, Route, Space, SpaceSummary};

/// Data-model generation of the target API.
///
/// Routable targets model URLs as Route resources bound to apps; legacy
/// targets store literal URL strings on the application record. Resolved
/// once when the target is set, never re-probed per operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    Routable,
    Legacy,
}

impl ApiVersion {
    pub fn is_routable(self) -> bool {
        matches!(self, ApiVersion::Routable)
    }
}

/// Resolved target carried on the client: endpoint plus data-model generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetInfo {
    pub url: String,
    pub api_version: ApiVersion,
}

/// Typed queries and mutations against the platform.
///
/// Each method is one blocking request-response exchange from the command's
/// point of view; commands issue them sequentially and stop at the first
/// failure. Lookups scoped to "the current space" use the space guid the
/// client was configured with.
#[async_trait]
pub trait CloudClient: Send + Sync {
    /// The resolved target this client talks to.
    fn target_info(&self) -> &TargetInfo;

    /// The configured current space.
    async fn current_space(&self) -> Result<Space, ApiError>;

    /// Spaces in the target organization, with app/service/domain names.
    async fn spaces(&self) -> Result<Vec<SpaceSummary>, ApiError>;

    /// Applications in the current space.
    async fn apps(&self) -> Result<Vec<AppSummary>, ApiError>;

    /// Application by name within the current space.
    async fn app_by_name(&self, name: &str) -> Result<App, ApiError>;

    /// Domains visible in the current space.
    async fn domains(&self) -> Result<Vec<Domain>, ApiError>;

    /// Domain by exact name within the current space.
    async fn domain_by_name(&self, name: &str) -> Result<Option<Domain>, ApiError>;

    /// Routes in the current space.
    async fn routes(&self) -> Result<Vec<Route>, ApiError>;

    /// Routes with the given host, across the visible scope.
    async fn routes_by_host(&self, host: &str) -> Result<Vec<Route>, ApiError>;

    /// Routes currently bound to the given application.
    async fn app_routes(&self, app: &App) -> Result<Vec<Route>, ApiError>;

    /// Create and persist a route. The caller is responsible for looking up
    /// existing routes first; (host, domain) is unique per space.
    async fn create_route(
        &self,
        host: &str,
        domain: &Domain,
        space_guid: &str,
    ) -> Result<Route, ApiError>;

    /// Bind a route to an application.
    async fn bind_route(&self, app: &App, route: &Route) -> Result<(), ApiError>;

    /// Remove a route-to-application association. Never deletes the route.
    async fn unbind_route(&self, app: &App, route: &Route) -> Result<(), ApiError>;

    /// Replace the literal URL list on a legacy application record.
    async fn update_app_urls(&self, app: &App, urls: &[String]) -> Result<(), ApiError>;
}

const HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const HTTP_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub(crate) fn build_http_client() -> Result<Client, ApiError> {
    Client::builder()
        .connect_timeout(HTTP_CONNECT_TIMEOUT)
        .timeout(HTTP_REQUEST_TIMEOUT)
        .build()
        .map_err(|e| ApiError::RequestFailed(format!("Failed to create HTTP client: {}", e)))
}

pub(crate) fn map_http_error(error: reqwest::Error) -> ApiError {
    if let Some(status) = error.status() {
        match status.as_u16() {
            401 | 403 => ApiError::AuthFailed(format!("{}", error)),
            _ => ApiError::RequestFailed(format!(
                "Request failed with status {}: {}",
                status, error
            )),
        }
    } else if error.is_timeout() {
        ApiError::RequestFailed(format!("Request timeout: {}", error))
    } else if error.is_connect() {
        ApiError::RequestFailed(format!("Connection error: {}", error))
    } else {
        ApiError::RequestFailed(format!("HTTP error: {}", error))
    }
}
