//! Space and domain listing command services.

use crate::api::{CloudClient, Domain};
use crate::error::ApiError;
use crate::progress::{name, step, ProgressReporter};

pub use crate::api::SpaceSummary;

pub struct SpacesCommandService;

/// Result of the space listing command, sorted by space name.
#[derive(Debug, Clone)]
pub struct SpacesListResult {
    pub spaces: Vec<SpaceSummary>,
}

/// Result of the domain listing command.
#[derive(Debug, Clone)]
pub struct DomainsListResult {
    pub domains: Vec<Domain>,
}

impl SpacesCommandService {
    pub async fn list(
        client: &dyn CloudClient,
        reporter: &dyn ProgressReporter,
    ) -> Result<SpacesListResult, ApiError> {
        let mut spaces = step(reporter, "Getting spaces", client.spaces()).await?;
        spaces.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(SpacesListResult { spaces })
    }

    pub async fn domains(
        client: &dyn CloudClient,
        reporter: &dyn ProgressReporter,
    ) -> Result<DomainsListResult, ApiError> {
        let space = client.current_space().await?;
        let mut domains = step(
            reporter,
            &format!("Getting domains in {}", name(&space.name)),
            client.domains(),
        )
        .await?;
        domains.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(DomainsListResult { domains })
    }
}
