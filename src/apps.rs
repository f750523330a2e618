//! Application listing command service.

use crate::api::{AppSummary, CloudClient};
use crate::error::ApiError;
use crate::progress::{step, ProgressReporter};

pub struct AppsCommandService;

/// Result of the app listing command.
#[derive(Debug, Clone)]
pub struct AppsListResult {
    pub apps: Vec<AppSummary>,
}

impl AppsCommandService {
    pub async fn list(
        client: &dyn CloudClient,
        reporter: &dyn ProgressReporter,
    ) -> Result<AppsListResult, ApiError> {
        let mut apps = step(reporter, "Getting apps", client.apps()).await?;
        apps.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(AppsListResult { apps })
    }
}
