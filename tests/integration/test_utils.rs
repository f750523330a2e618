//! Shared test collaborators: in-memory platform fake, recording reporter,
//! and scripted prompter.

use async_trait::async_trait;
use nimbus::api::{
    ApiVersion, App, AppSummary, CloudClient, Domain, Route, Space, SpaceSummary, TargetInfo,
};
use nimbus::cli::RunContext;
use nimbus::config::{NimbusConfig, TargetConfig};
use nimbus::error::ApiError;
use nimbus::progress::ProgressReporter;
use nimbus::prompt::UrlPrompter;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

/// In-memory platform state behind the `CloudClient` interface.
///
/// Every mutating method records its name in `calls`, so tests can assert
/// that failed commands performed no create/bind/update side effects.
pub struct FakeCloudClient {
    info: TargetInfo,
    pub state: Mutex<FakeState>,
    pub calls: Mutex<Vec<String>>,
    next_guid: AtomicU32,
}

#[derive(Default)]
pub struct FakeState {
    pub current_space: Option<Space>,
    pub spaces: Vec<SpaceSummary>,
    pub apps: Vec<App>,
    pub domains: Vec<Domain>,
    pub routes: Vec<Route>,
    /// (app guid, route guid) associations.
    pub bindings: Vec<(String, String)>,
}

impl FakeCloudClient {
    pub fn routable() -> Self {
        Self::new(ApiVersion::Routable)
    }

    pub fn legacy() -> Self {
        Self::new(ApiVersion::Legacy)
    }

    fn new(api_version: ApiVersion) -> Self {
        let mut state = FakeState::default();
        state.current_space = Some(Space {
            guid: "space-1".to_string(),
            name: "development".to_string(),
        });
        Self {
            info: TargetInfo {
                url: "https://api.nimbus.test".to_string(),
                api_version,
            },
            state: Mutex::new(state),
            calls: Mutex::new(Vec::new()),
            next_guid: AtomicU32::new(1),
        }
    }

    fn guid(&self, prefix: &str) -> String {
        format!("{}-{}", prefix, self.next_guid.fetch_add(1, Ordering::SeqCst))
    }

    fn record(&self, call: &str) {
        self.calls.lock().unwrap().push(call.to_string());
    }

    pub fn add_app(&self, name: &str, urls: &[&str]) -> App {
        let app = App {
            guid: self.guid("app"),
            name: name.to_string(),
            space_guid: "space-1".to_string(),
            urls: urls.iter().map(|u| u.to_string()).collect(),
        };
        self.state.lock().unwrap().apps.push(app.clone());
        app
    }

    pub fn add_domain(&self, name: &str) -> Domain {
        let domain = Domain {
            guid: self.guid("domain"),
            name: name.to_string(),
        };
        self.state.lock().unwrap().domains.push(domain.clone());
        domain
    }

    pub fn add_route(&self, host: &str, domain: &Domain) -> Route {
        let route = Route {
            guid: self.guid("route"),
            host: host.to_string(),
            domain: domain.clone(),
            space_guid: "space-1".to_string(),
        };
        self.state.lock().unwrap().routes.push(route.clone());
        route
    }

    pub fn bind(&self, app: &App, route: &Route) {
        self.state
            .lock()
            .unwrap()
            .bindings
            .push((app.guid.clone(), route.guid.clone()));
    }

    pub fn bindings_for(&self, app: &App) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .bindings
            .iter()
            .filter(|(a, _)| a == &app.guid)
            .map(|(_, r)| r.clone())
            .collect()
    }

    pub fn route_count(&self) -> usize {
        self.state.lock().unwrap().routes.len()
    }

    pub fn urls_for(&self, app: &App) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .apps
            .iter()
            .find(|a| a.guid == app.guid)
            .map(|a| a.urls.clone())
            .unwrap_or_default()
    }

    pub fn called(&self, call: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|c| c == call)
    }

    pub fn call_count(&self, call: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| *c == call).count()
    }
}

#[async_trait]
impl CloudClient for FakeCloudClient {
    fn target_info(&self) -> &TargetInfo {
        &self.info
    }

    async fn current_space(&self) -> Result<Space, ApiError> {
        self.state
            .lock()
            .unwrap()
            .current_space
            .clone()
            .ok_or(ApiError::NoSpace)
    }

    async fn spaces(&self) -> Result<Vec<SpaceSummary>, ApiError> {
        self.record("spaces");
        Ok(self.state.lock().unwrap().spaces.clone())
    }

    async fn apps(&self) -> Result<Vec<AppSummary>, ApiError> {
        self.record("apps");
        let state = self.state.lock().unwrap();
        Ok(state
            .apps
            .iter()
            .map(|app| {
                let route_urls: Vec<String> = state
                    .bindings
                    .iter()
                    .filter(|(a, _)| a == &app.guid)
                    .filter_map(|(_, r)| {
                        state.routes.iter().find(|route| &route.guid == r)
                    })
                    .map(|route| route.url())
                    .collect();
                AppSummary {
                    name: app.name.clone(),
                    state: "STARTED".to_string(),
                    urls: if route_urls.is_empty() {
                        app.urls.clone()
                    } else {
                        route_urls
                    },
                }
            })
            .collect())
    }

    async fn app_by_name(&self, name: &str) -> Result<App, ApiError> {
        self.state
            .lock()
            .unwrap()
            .apps
            .iter()
            .find(|a| a.name == name)
            .cloned()
            .ok_or_else(|| ApiError::AppNotFound(name.to_string()))
    }

    async fn domains(&self) -> Result<Vec<Domain>, ApiError> {
        self.record("domains");
        Ok(self.state.lock().unwrap().domains.clone())
    }

    async fn domain_by_name(&self, name: &str) -> Result<Option<Domain>, ApiError> {
        self.record("domain_by_name");
        Ok(self
            .state
            .lock()
            .unwrap()
            .domains
            .iter()
            .find(|d| d.name == name)
            .cloned())
    }

    async fn routes(&self) -> Result<Vec<Route>, ApiError> {
        self.record("routes");
        Ok(self.state.lock().unwrap().routes.clone())
    }

    async fn routes_by_host(&self, host: &str) -> Result<Vec<Route>, ApiError> {
        self.record("routes_by_host");
        Ok(self
            .state
            .lock()
            .unwrap()
            .routes
            .iter()
            .filter(|r| r.host == host)
            .cloned()
            .collect())
    }

    async fn app_routes(&self, app: &App) -> Result<Vec<Route>, ApiError> {
        self.record("app_routes");
        let state = self.state.lock().unwrap();
        Ok(state
            .bindings
            .iter()
            .filter(|(a, _)| a == &app.guid)
            .filter_map(|(_, r)| state.routes.iter().find(|route| &route.guid == r))
            .cloned()
            .collect())
    }

    async fn create_route(
        &self,
        host: &str,
        domain: &Domain,
        space_guid: &str,
    ) -> Result<Route, ApiError> {
        self.record("create_route");
        let mut state = self.state.lock().unwrap();
        let duplicate = state.routes.iter().any(|r| {
            r.host == host && r.domain.guid == domain.guid && r.space_guid == space_guid
        });
        if duplicate {
            return Err(ApiError::UnexpectedResponse(format!(
                "duplicate route {}.{}",
                host, domain.name
            )));
        }
        let route = Route {
            guid: self.guid("route"),
            host: host.to_string(),
            domain: domain.clone(),
            space_guid: space_guid.to_string(),
        };
        state.routes.push(route.clone());
        Ok(route)
    }

    async fn bind_route(&self, app: &App, route: &Route) -> Result<(), ApiError> {
        self.record("bind_route");
        let mut state = self.state.lock().unwrap();
        let pair = (app.guid.clone(), route.guid.clone());
        if !state.bindings.contains(&pair) {
            state.bindings.push(pair);
        }
        Ok(())
    }

    async fn unbind_route(&self, app: &App, route: &Route) -> Result<(), ApiError> {
        self.record("unbind_route");
        let mut state = self.state.lock().unwrap();
        state
            .bindings
            .retain(|(a, r)| !(a == &app.guid && r == &route.guid));
        Ok(())
    }

    async fn update_app_urls(&self, app: &App, urls: &[String]) -> Result<(), ApiError> {
        self.record("update_app_urls");
        let mut state = self.state.lock().unwrap();
        let record = state
            .apps
            .iter_mut()
            .find(|a| a.guid == app.guid)
            .ok_or_else(|| ApiError::AppNotFound(app.name.clone()))?;
        record.urls = urls.to_vec();
        Ok(())
    }
}

/// Reporter recording progress events as plain strings.
#[derive(Default)]
pub struct RecordingReporter {
    pub events: Mutex<Vec<String>>,
}

impl RecordingReporter {
    fn push(&self, event: String) {
        self.events.lock().unwrap().push(event);
    }

    pub fn snapshot(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }

    pub fn has_step(&self, prefix: &str) -> bool {
        self.snapshot()
            .iter()
            .any(|e| e.starts_with("step: ") && e.contains(prefix))
    }

    pub fn has_report(&self, fragment: &str) -> bool {
        self.snapshot()
            .iter()
            .any(|e| e.starts_with("report: ") && e.contains(fragment))
    }
}

impl ProgressReporter for RecordingReporter {
    fn step_started(&self, label: &str) {
        self.push(format!("step: {}", label));
    }

    fn step_ok(&self) {
        self.push("ok".to_string());
    }

    fn step_failed(&self) {
        self.push("failed".to_string());
    }

    fn report(&self, message: &str) {
        self.push(format!("report: {}", message));
    }
}

/// Prompter returning a scripted choice, recording what it was asked.
#[derive(Default)]
pub struct ScriptedPrompter {
    pub choice: Mutex<Option<String>>,
    pub asked: Mutex<Vec<Vec<String>>>,
}

impl ScriptedPrompter {
    pub fn with_choice(choice: &str) -> Self {
        Self {
            choice: Mutex::new(Some(choice.to_string())),
            asked: Mutex::new(Vec::new()),
        }
    }

    pub fn was_asked(&self) -> bool {
        !self.asked.lock().unwrap().is_empty()
    }
}

impl UrlPrompter for ScriptedPrompter {
    fn choose(&self, _prompt: &str, choices: &[String]) -> Result<String, ApiError> {
        self.asked.lock().unwrap().push(choices.to_vec());
        self.choice
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::InputError("no scripted choice".to_string()))
    }
}

/// Test config pointing at the fake target; the path is never written by
/// the commands under test.
pub fn test_config(api_version: ApiVersion) -> NimbusConfig {
    NimbusConfig {
        target: Some(TargetConfig {
            url: "https://api.nimbus.test".to_string(),
            token: Some("test-token".to_string()),
            organization: Some("org-1".to_string()),
            space: Some("space-1".to_string()),
            api_version,
        }),
        ..Default::default()
    }
}

/// Build a run context around the fake collaborators.
pub fn make_context(
    client: Arc<FakeCloudClient>,
    reporter: Arc<RecordingReporter>,
    prompter: Arc<ScriptedPrompter>,
) -> RunContext {
    let api_version = client.target_info().api_version;
    RunContext::with_collaborators(
        test_config(api_version),
        PathBuf::from("/nonexistent/nimbus-config.toml"),
        Some(client),
        reporter,
        prompter,
    )
}
