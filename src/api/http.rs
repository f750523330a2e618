//! HTTP implementation of the platform API.
//!
//! Routable targets expose v2-style JSON resources (`metadata.guid` plus
//! `entity`); legacy targets expose flat application records owning literal
//! `uris`. Authenticated requests carry a bearer Authorization header.

use crate::api::resources::{App, AppSummary, Domain, Route, Space, SpaceSummary};
use crate::api::{build_http_client, map_http_error, CloudClient, TargetInfo};
use crate::config::TargetConfig;
use crate::error::ApiError;
use async_trait::async_trait;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

// v2 wire format

#[derive(Debug, Deserialize)]
struct Resource<T> {
    metadata: Metadata,
    entity: T,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    guid: String,
}

#[derive(Debug, Deserialize)]
struct Page<T> {
    resources: Vec<Resource<T>>,
}

#[derive(Debug, Deserialize)]
struct NamedEntity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct SpaceDetailEntity {
    name: String,
    #[serde(default)]
    apps: Vec<Resource<NamedEntity>>,
    #[serde(default)]
    service_instances: Vec<Resource<NamedEntity>>,
    #[serde(default)]
    domains: Vec<Resource<NamedEntity>>,
}

#[derive(Debug, Deserialize)]
struct DomainEntity {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RouteEntity {
    host: String,
    space_guid: String,
    domain: Resource<DomainEntity>,
}

#[derive(Debug, Deserialize)]
struct AppEntity {
    name: String,
    space_guid: String,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    routes: Vec<Resource<RouteEntity>>,
}

#[derive(Debug, Serialize)]
struct RouteCreateRequest<'a> {
    host: &'a str,
    domain_guid: &'a str,
    space_guid: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatedResource {
    metadata: Metadata,
}

// Legacy wire format: flat records. Updates send the whole record back, so
// unknown fields round-trip through `rest`.

#[derive(Debug, Serialize, Deserialize)]
struct LegacyApp {
    name: String,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    uris: Vec<String>,
    #[serde(flatten)]
    rest: serde_json::Map<String, serde_json::Value>,
}

/// Endpoint metadata from `GET /info`.
#[derive(Debug, Deserialize)]
pub struct InfoResponse {
    #[serde(default)]
    pub name: Option<String>,
    pub version: u32,
    #[serde(default)]
    pub description: Option<String>,
}

/// Fetch endpoint metadata for `nimbus target`.
pub async fn fetch_target_info(url: &str) -> Result<InfoResponse, ApiError> {
    let client = build_http_client()?;
    let response = client
        .get(format!("{}/info", url))
        .send()
        .await
        .map_err(map_http_error)?;
    if !response.status().is_success() {
        return Err(ApiError::RequestFailed(format!(
            "GET /info returned status {}",
            response.status()
        )));
    }
    response
        .json()
        .await
        .map_err(|e| ApiError::UnexpectedResponse(format!("Failed to parse /info: {}", e)))
}

/// Platform client over HTTP.
pub struct HttpCloudClient {
    client: Client,
    target: TargetInfo,
    token: Option<String>,
    organization_guid: Option<String>,
    space_guid: Option<String>,
}

impl HttpCloudClient {
    pub fn from_config(config: &TargetConfig) -> Result<Self, ApiError> {
        Ok(Self {
            client: build_http_client()?,
            target: TargetInfo {
                url: config.url.trim_end_matches('/').to_string(),
                api_version: config.api_version,
            },
            token: config.token.clone(),
            organization_guid: config.organization.clone(),
            space_guid: config.space.clone(),
        })
    }

    fn space_guid(&self) -> Result<&str, ApiError> {
        self.space_guid.as_deref().ok_or(ApiError::NoSpace)
    }

    fn organization_guid(&self) -> Result<&str, ApiError> {
        self.organization_guid.as_deref().ok_or(ApiError::NoOrganization)
    }

    fn require_routable(&self) -> Result<(), ApiError> {
        if self.target.api_version.is_routable() {
            Ok(())
        } else {
            Err(ApiError::RequestFailed(
                "operation requires a routable target".to_string(),
            ))
        }
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{}", self.target.url, path));
        match &self.token {
            Some(token) => builder.header("Authorization", format!("bearer {}", token)),
            None => builder,
        }
    }

    async fn check(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                ApiError::AuthFailed(format!("status {}: {}", status, body))
            }
            _ => ApiError::RequestFailed(format!("status {}: {}", status, body)),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .request(Method::GET, path)
            .query(query)
            .send()
            .await
            .map_err(map_http_error)?;
        let response = self.check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::UnexpectedResponse(format!("Failed to parse response: {}", e)))
    }

    fn route_from_resource(resource: Resource<RouteEntity>) -> Route {
        Route {
            guid: resource.metadata.guid,
            host: resource.entity.host,
            domain: Domain {
                guid: resource.entity.domain.metadata.guid,
                name: resource.entity.domain.entity.name,
            },
            space_guid: resource.entity.space_guid,
        }
    }

    async fn legacy_app_record(&self, name: &str) -> Result<LegacyApp, ApiError> {
        let response = self
            .request(Method::GET, &format!("/apps/{}", name))
            .send()
            .await
            .map_err(map_http_error)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(ApiError::AppNotFound(name.to_string()));
        }
        let response = self.check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ApiError::UnexpectedResponse(format!("Failed to parse app record: {}", e)))
    }
}

#[async_trait]
impl CloudClient for HttpCloudClient {
    fn target_info(&self) -> &TargetInfo {
        &self.target
    }

    async fn current_space(&self) -> Result<Space, ApiError> {
        self.require_routable()?;
        let guid = self.space_guid()?.to_string();
        let resource: Resource<NamedEntity> = self
            .get_json(&format!("/v2/spaces/{}", guid), &[])
            .await?;
        Ok(Space {
            guid: resource.metadata.guid,
            name: resource.entity.name,
        })
    }

    async fn spaces(&self) -> Result<Vec<SpaceSummary>, ApiError> {
        self.require_routable()?;
        let org = self.organization_guid()?.to_string();
        let page: Page<SpaceDetailEntity> = self
            .get_json(
                &format!("/v2/organizations/{}/spaces", org),
                &[("inline-relations-depth", "1".to_string())],
            )
            .await?;
        Ok(page
            .resources
            .into_iter()
            .map(|r| SpaceSummary {
                name: r.entity.name,
                app_names: r.entity.apps.into_iter().map(|a| a.entity.name).collect(),
                service_names: r
                    .entity
                    .service_instances
                    .into_iter()
                    .map(|s| s.entity.name)
                    .collect(),
                domain_names: r
                    .entity
                    .domains
                    .into_iter()
                    .map(|d| d.entity.name)
                    .collect(),
            })
            .collect())
    }

    async fn apps(&self) -> Result<Vec<AppSummary>, ApiError> {
        if !self.target.api_version.is_routable() {
            let records: Vec<LegacyApp> = self.get_json("/apps", &[]).await?;
            return Ok(records
                .into_iter()
                .map(|r| AppSummary {
                    name: r.name,
                    state: r.state.unwrap_or_else(|| "unknown".to_string()),
                    urls: r.uris,
                })
                .collect());
        }
        let space = self.space_guid()?.to_string();
        let page: Page<AppEntity> = self
            .get_json(
                &format!("/v2/spaces/{}/apps", space),
                &[("inline-relations-depth", "1".to_string())],
            )
            .await?;
        Ok(page
            .resources
            .into_iter()
            .map(|r| AppSummary {
                name: r.entity.name,
                state: r.entity.state.unwrap_or_else(|| "unknown".to_string()),
                urls: r
                    .entity
                    .routes
                    .into_iter()
                    .map(|route| {
                        format!("{}.{}", route.entity.host, route.entity.domain.entity.name)
                    })
                    .collect(),
            })
            .collect())
    }

    async fn app_by_name(&self, name: &str) -> Result<App, ApiError> {
        if !self.target.api_version.is_routable() {
            let record = self.legacy_app_record(name).await?;
            return Ok(App {
                guid: record.name.clone(),
                name: record.name,
                space_guid: String::new(),
                urls: record.uris,
            });
        }
        let space = self.space_guid()?.to_string();
        let page: Page<AppEntity> = self
            .get_json(
                &format!("/v2/spaces/{}/apps", space),
                &[
                    ("q", format!("name:{}", name)),
                    ("inline-relations-depth", "1".to_string()),
                ],
            )
            .await?;
        let resource = page
            .resources
            .into_iter()
            .next()
            .ok_or_else(|| ApiError::AppNotFound(name.to_string()))?;
        Ok(App {
            guid: resource.metadata.guid,
            name: resource.entity.name,
            space_guid: resource.entity.space_guid,
            urls: Vec::new(),
        })
    }

    async fn domains(&self) -> Result<Vec<Domain>, ApiError> {
        self.require_routable()?;
        let space = self.space_guid()?.to_string();
        let page: Page<DomainEntity> = self
            .get_json(&format!("/v2/spaces/{}/domains", space), &[])
            .await?;
        Ok(page
            .resources
            .into_iter()
            .map(|r| Domain {
                guid: r.metadata.guid,
                name: r.entity.name,
            })
            .collect())
    }

    async fn domain_by_name(&self, name: &str) -> Result<Option<Domain>, ApiError> {
        self.require_routable()?;
        let space = self.space_guid()?.to_string();
        let page: Page<DomainEntity> = self
            .get_json(
                &format!("/v2/spaces/{}/domains", space),
                &[("q", format!("name:{}", name))],
            )
            .await?;
        Ok(page.resources.into_iter().next().map(|r| Domain {
            guid: r.metadata.guid,
            name: r.entity.name,
        }))
    }

    async fn routes(&self) -> Result<Vec<Route>, ApiError> {
        self.require_routable()?;
        let space = self.space_guid()?.to_string();
        let page: Page<RouteEntity> = self
            .get_json(
                &format!("/v2/spaces/{}/routes", space),
                &[("inline-relations-depth", "1".to_string())],
            )
            .await?;
        Ok(page
            .resources
            .into_iter()
            .map(Self::route_from_resource)
            .collect())
    }

    async fn routes_by_host(&self, host: &str) -> Result<Vec<Route>, ApiError> {
        self.require_routable()?;
        let page: Page<RouteEntity> = self
            .get_json(
                "/v2/routes",
                &[
                    ("q", format!("host:{}", host)),
                    ("inline-relations-depth", "1".to_string()),
                ],
            )
            .await?;
        Ok(page
            .resources
            .into_iter()
            .map(Self::route_from_resource)
            .collect())
    }

    async fn app_routes(&self, app: &App) -> Result<Vec<Route>, ApiError> {
        self.require_routable()?;
        let page: Page<RouteEntity> = self
            .get_json(
                &format!("/v2/apps/{}/routes", app.guid),
                &[("inline-relations-depth", "1".to_string())],
            )
            .await?;
        Ok(page
            .resources
            .into_iter()
            .map(Self::route_from_resource)
            .collect())
    }

    async fn create_route(
        &self,
        host: &str,
        domain: &Domain,
        space_guid: &str,
    ) -> Result<Route, ApiError> {
        self.require_routable()?;
        let request = RouteCreateRequest {
            host,
            domain_guid: &domain.guid,
            space_guid,
        };
        let response = self
            .request(Method::POST, "/v2/routes")
            .json(&request)
            .send()
            .await
            .map_err(map_http_error)?;
        let response = self.check(response).await?;
        let created: CreatedResource = response.json().await.map_err(|e| {
            ApiError::UnexpectedResponse(format!("Failed to parse created route: {}", e))
        })?;
        Ok(Route {
            guid: created.metadata.guid,
            host: host.to_string(),
            domain: domain.clone(),
            space_guid: space_guid.to_string(),
        })
    }

    async fn bind_route(&self, app: &App, route: &Route) -> Result<(), ApiError> {
        self.require_routable()?;
        let response = self
            .request(
                Method::PUT,
                &format!("/v2/apps/{}/routes/{}", app.guid, route.guid),
            )
            .send()
            .await
            .map_err(map_http_error)?;
        self.check(response).await?;
        Ok(())
    }

    async fn unbind_route(&self, app: &App, route: &Route) -> Result<(), ApiError> {
        self.require_routable()?;
        let response = self
            .request(
                Method::DELETE,
                &format!("/v2/apps/{}/routes/{}", app.guid, route.guid),
            )
            .send()
            .await
            .map_err(map_http_error)?;
        self.check(response).await?;
        Ok(())
    }

    async fn update_app_urls(&self, app: &App, urls: &[String]) -> Result<(), ApiError> {
        if self.target.api_version.is_routable() {
            return Err(ApiError::RequestFailed(
                "URL list updates are a legacy-target operation".to_string(),
            ));
        }
        let mut record = self.legacy_app_record(&app.name).await?;
        record.uris = urls.to_vec();
        let response = self
            .request(Method::PUT, &format!("/apps/{}", app.name))
            .json(&record)
            .send()
            .await
            .map_err(map_http_error)?;
        self.check(response).await?;
        Ok(())
    }
}
