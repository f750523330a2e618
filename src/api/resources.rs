//! Resource model: in-memory representations of remote platform entities.
//!
//! Plain data, fetched on demand. Identity is the platform guid; equality on
//! `Domain` and `Route` is guid-based equality of the whole value, which is
//! what the route-matching scans compare.

use serde::{Deserialize, Serialize};

/// An application, scoped to a space.
///
/// `urls` carries the literal URL list on legacy targets. On routable
/// targets URL state lives in the bound routes and this list stays empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct App {
    pub guid: String,
    pub name: String,
    pub space_guid: String,
    #[serde(default)]
    pub urls: Vec<String>,
}

/// A DNS suffix registered within a space. Referenced, never owned, by routes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub guid: String,
    pub name: String,
}

/// A persisted (host, domain) pair, bindable to zero or more applications.
/// At most one route exists per (host, domain) pair within a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Route {
    pub guid: String,
    pub host: String,
    pub domain: Domain,
    pub space_guid: String,
}

impl Route {
    /// Bare `host.domain` form, as shown to the user.
    pub fn url(&self) -> String {
        format!("{}.{}", self.host, self.domain.name)
    }
}

/// A scoping container owning domains, routes, and applications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Space {
    pub guid: String,
    pub name: String,
}

/// One row for `nimbus spaces`: the space plus the names of what it owns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpaceSummary {
    pub name: String,
    #[serde(default)]
    pub app_names: Vec<String>,
    #[serde(default)]
    pub service_names: Vec<String>,
    #[serde(default)]
    pub domain_names: Vec<String>,
}

/// One row for `nimbus apps`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSummary {
    pub name: String,
    pub state: String,
    #[serde(default)]
    pub urls: Vec<String>,
}
