//! Route-mapping command service: map and unmap a URL for an application,
//! plus the route listing.
//!
//! On routable targets a URL becomes a (host, domain) Route resource bound
//! to the app; on legacy targets it is a literal string on the application
//! record. The branch hangs off the client's resolved target generation.

use crate::api::{App, CloudClient, Domain, Route};
use crate::error::ApiError;
use crate::progress::{name, step, ProgressReporter};
use crate::prompt::UrlPrompter;
use crate::routes::{simplify_url, split_host_domain};

pub struct RouteCommandService;

/// Result of the route listing command.
#[derive(Debug, Clone)]
pub struct RoutesListResult {
    pub routes: Vec<Route>,
}

impl RouteCommandService {
    /// Ensure `url` is mapped to `app`: find or create the route, then bind
    /// it (routable), or append to the app's URL list (legacy).
    pub async fn map(
        client: &dyn CloudClient,
        reporter: &dyn ProgressReporter,
        app: &App,
        url: &str,
    ) -> Result<String, ApiError> {
        let simple = simplify_url(url);

        if client.target_info().api_version.is_routable() {
            let (host, domain_name) = split_host_domain(&simple)?;
            let domain = Self::resolve_domain(client, domain_name).await?;

            let existing = client
                .routes_by_host(host)
                .await?
                .into_iter()
                .find(|r| r.domain == domain);

            let route = match existing {
                Some(route) => route,
                None => {
                    step(
                        reporter,
                        &format!("Creating route {}", name(&simple)),
                        client.create_route(host, &domain, &app.space_guid),
                    )
                    .await?
                }
            };

            step(
                reporter,
                &format!("Binding {} to {}", name(&simple), name(&app.name)),
                client.bind_route(app, &route),
            )
            .await?;

            Ok(format!("Mapped {} to {}", simple, app.name))
        } else {
            let mut urls = app.urls.clone();
            urls.push(simple.clone());
            step(
                reporter,
                &format!("Updating {}", name(&app.name)),
                client.update_app_urls(app, &urls),
            )
            .await?;
            Ok(format!("Mapped {} to {}", simple, app.name))
        }
    }

    /// Ensure `url` is no longer mapped to `app`. With no URL given, the
    /// choice comes from the app's current list via the injected prompter.
    /// Unbinding never deletes the route itself.
    pub async fn unmap(
        client: &dyn CloudClient,
        reporter: &dyn ProgressReporter,
        prompter: &dyn UrlPrompter,
        app: &App,
        url: Option<&str>,
    ) -> Result<String, ApiError> {
        let routable = client.target_info().api_version.is_routable();
        let url = match url {
            Some(u) => u.to_string(),
            None => Self::choose_url(client, prompter, app, routable).await?,
        };
        let simple = simplify_url(&url);

        if routable {
            let (host, domain_name) = split_host_domain(&simple)?;
            let domain = Self::resolve_domain(client, domain_name).await?;

            let route = client
                .app_routes(app)
                .await?
                .into_iter()
                .find(|r| r.host == host && r.domain == domain)
                .ok_or_else(|| ApiError::InvalidRoute(simple.clone()))?;

            step(
                reporter,
                &format!("Removing route {}", name(&simple)),
                client.unbind_route(app, &route),
            )
            .await?;

            Ok(format!("Unmapped {} from {}", simple, app.name))
        } else {
            let mut urls = app.urls.clone();
            let Some(position) = urls.iter().position(|u| u == &simple) else {
                // Soft failure: report and return cleanly, nothing persisted.
                reporter.step_started(&format!("Updating {}", name(&app.name)));
                reporter.step_failed();
                reporter.report(&format!(
                    "URL {} is not mapped to this application.",
                    url
                ));
                return Ok(String::new());
            };
            urls.remove(position);

            step(
                reporter,
                &format!("Updating {}", name(&app.name)),
                client.update_app_urls(app, &urls),
            )
            .await?;

            Ok(format!("Unmapped {} from {}", simple, app.name))
        }
    }

    /// List routes in the current space.
    pub async fn list(
        client: &dyn CloudClient,
        reporter: &dyn ProgressReporter,
    ) -> Result<RoutesListResult, ApiError> {
        let space = client.current_space().await?;
        let mut routes = step(
            reporter,
            &format!("Getting routes in {}", name(&space.name)),
            client.routes(),
        )
        .await?;
        routes.sort_by(|a, b| a.url().cmp(&b.url()));
        Ok(RoutesListResult { routes })
    }

    /// Resolve the domain name or produce the user-facing failure. When a
    /// registered domain is a proper suffix of the requested name, the
    /// failure names it: the URL had a multi-segment host, which the
    /// first-dot split does not support.
    async fn resolve_domain(
        client: &dyn CloudClient,
        domain_name: &str,
    ) -> Result<Domain, ApiError> {
        if let Some(domain) = client.domain_by_name(domain_name).await? {
            return Ok(domain);
        }
        if domain_name.contains('.') {
            for registered in client.domains().await? {
                if domain_name.ends_with(&format!(".{}", registered.name)) {
                    return Err(ApiError::MultiSegmentHost {
                        given: domain_name.to_string(),
                        registered: registered.name,
                    });
                }
            }
        }
        Err(ApiError::InvalidDomain(domain_name.to_string()))
    }

    async fn choose_url(
        client: &dyn CloudClient,
        prompter: &dyn UrlPrompter,
        app: &App,
        routable: bool,
    ) -> Result<String, ApiError> {
        let mut candidates: Vec<String> = if routable {
            client
                .app_routes(app)
                .await?
                .iter()
                .map(|r| r.url())
                .collect()
        } else {
            app.urls.clone()
        };
        match candidates.len() {
            0 => Err(ApiError::InvalidRoute(format!(
                "no URLs mapped to {}",
                app.name
            ))),
            1 => Ok(candidates.remove(0)),
            _ => prompter.choose("Which URL?", &candidates),
        }
    }
}
