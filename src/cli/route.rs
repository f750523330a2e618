//! CLI route: single route table and run context. Dispatches to domain
//! services and presentation.

use crate::api::http::HttpCloudClient;
use crate::api::CloudClient;
use crate::apps::AppsCommandService;
use crate::cli::parse::Commands;
use crate::cli::{command_name, summary_descriptor};
use crate::config::{ConfigLoader, NimbusConfig};
use crate::error::ApiError;
use crate::progress::{ConsoleReporter, ProgressReporter};
use crate::prompt::{DialoguerPrompter, UrlPrompter};
use crate::routes::RouteCommandService;
use crate::spaces::SpacesCommandService;
use crate::target::TargetCommandService;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Runtime context for CLI execution: configuration handle, platform
/// client, and the injected reporter/prompter collaborators. Built once per
/// invocation.
pub struct RunContext {
    config: Arc<RwLock<NimbusConfig>>,
    config_path: PathBuf,
    client: Option<Arc<dyn CloudClient>>,
    reporter: Arc<dyn ProgressReporter>,
    prompter: Arc<dyn UrlPrompter>,
}

impl RunContext {
    /// Create a run context from the default or explicit config path,
    /// with console collaborators.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, ApiError> {
        let config_path = match config_path {
            Some(path) => path,
            None => ConfigLoader::default_path()?,
        };
        let config = ConfigLoader::load_from_file(&config_path)?;
        let client: Option<Arc<dyn CloudClient>> = match config.target.as_ref() {
            Some(target) => Some(Arc::new(HttpCloudClient::from_config(target)?)),
            None => None,
        };
        Ok(Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
            client,
            reporter: Arc::new(ConsoleReporter),
            prompter: Arc::new(DialoguerPrompter),
        })
    }

    /// Create a run context with injected collaborators. Tests drive the
    /// route table through this with a fake client, recording reporter, and
    /// scripted prompter.
    pub fn with_collaborators(
        config: NimbusConfig,
        config_path: PathBuf,
        client: Option<Arc<dyn CloudClient>>,
        reporter: Arc<dyn ProgressReporter>,
        prompter: Arc<dyn UrlPrompter>,
    ) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            config_path,
            client,
            reporter,
            prompter,
        }
    }

    fn client(&self) -> Result<Arc<dyn CloudClient>, ApiError> {
        self.client.clone().ok_or(ApiError::NoTarget)
    }

    /// Execute a CLI command via the single route table.
    ///
    /// The services are async (the HTTP client is reqwest/tokio); a
    /// per-invocation runtime drives them to completion sequentially.
    pub fn execute(&self, command: &Commands) -> Result<String, ApiError> {
        let started = Instant::now();
        let runtime = tokio::runtime::Runtime::new().map_err(|e| {
            ApiError::ConfigError(format!("Failed to start async runtime: {}", e))
        })?;
        let result = runtime.block_on(self.execute_inner(command));
        let duration_ms = started.elapsed().as_millis() as u64;
        match &result {
            Ok(_) => tracing::info!(
                command = %command_name(command),
                descriptor = %summary_descriptor(command),
                duration_ms,
                "command completed"
            ),
            Err(e) => tracing::error!(
                command = %command_name(command),
                descriptor = %summary_descriptor(command),
                duration_ms,
                error = %e,
                "command failed"
            ),
        }
        result
    }

    async fn execute_inner(&self, command: &Commands) -> Result<String, ApiError> {
        match command {
            Commands::Target {
                url,
                token,
                organization,
                space,
            } => {
                self.handle_target(
                    url.as_deref(),
                    token.as_deref(),
                    organization.as_deref(),
                    space.as_deref(),
                )
                .await
            }
            Commands::Map { app, url } => self.handle_map(app, url).await,
            Commands::Unmap { app, url } => self.handle_unmap(app, url.as_deref()).await,
            Commands::Apps { format } => self.handle_apps(format).await,
            Commands::Routes { format } => self.handle_routes(format).await,
            Commands::Domains { format } => self.handle_domains(format).await,
            Commands::Spaces { format, full } => self.handle_spaces(format, *full).await,
        }
    }

    async fn handle_target(
        &self,
        url: Option<&str>,
        token: Option<&str>,
        organization: Option<&str>,
        space: Option<&str>,
    ) -> Result<String, ApiError> {
        let Some(url) = url else {
            let config = self.config.read();
            return Ok(super::format_target_text(config.target.as_ref()));
        };
        let mut updated = self.config.read().clone();
        let result = TargetCommandService::set(
            &mut updated,
            &self.config_path,
            url,
            token,
            organization,
            space,
        )
        .await?;
        *self.config.write() = updated;
        Ok(super::format_target_set_text(&result))
    }

    async fn handle_map(&self, app_name: &str, url: &str) -> Result<String, ApiError> {
        let client = self.client()?;
        let app = client.app_by_name(app_name).await?;
        RouteCommandService::map(client.as_ref(), self.reporter.as_ref(), &app, url).await
    }

    async fn handle_unmap(&self, app_name: &str, url: Option<&str>) -> Result<String, ApiError> {
        let client = self.client()?;
        let app = client.app_by_name(app_name).await?;
        RouteCommandService::unmap(
            client.as_ref(),
            self.reporter.as_ref(),
            self.prompter.as_ref(),
            &app,
            url,
        )
        .await
    }

    async fn handle_apps(&self, format: &str) -> Result<String, ApiError> {
        let client = self.client()?;
        let result = AppsCommandService::list(client.as_ref(), self.reporter.as_ref()).await?;
        match format {
            "json" => Ok(super::format_apps_result_json(&result)),
            _ => Ok(super::format_apps_result_text(&result)),
        }
    }

    async fn handle_routes(&self, format: &str) -> Result<String, ApiError> {
        let client = self.client()?;
        let result = RouteCommandService::list(client.as_ref(), self.reporter.as_ref()).await?;
        match format {
            "json" => Ok(super::format_routes_result_json(&result)),
            _ => Ok(super::format_routes_result_text(&result)),
        }
    }

    async fn handle_domains(&self, format: &str) -> Result<String, ApiError> {
        let client = self.client()?;
        let result =
            SpacesCommandService::domains(client.as_ref(), self.reporter.as_ref()).await?;
        match format {
            "json" => Ok(super::format_domains_result_json(&result)),
            _ => Ok(super::format_domains_result_text(&result)),
        }
    }

    async fn handle_spaces(&self, format: &str, full: bool) -> Result<String, ApiError> {
        let client = self.client()?;
        let result = SpacesCommandService::list(client.as_ref(), self.reporter.as_ref()).await?;
        match format {
            "json" => Ok(super::format_spaces_result_json(&result)),
            _ if full => Ok(super::format_spaces_result_full_text(&result)),
            _ => Ok(super::format_spaces_result_text(&result)),
        }
    }
}
