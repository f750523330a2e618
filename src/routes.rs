//! Route domain: URL normalization and the map/unmap command service.

use crate::error::ApiError;

pub mod commands;

pub use commands::{RouteCommandService, RoutesListResult};

/// Strip a leading `http://` or `https://` scheme (case-insensitively) and
/// any trailing slash, yielding the bare `host.domain` form.
pub fn simplify_url(url: &str) -> String {
    let mut simple = url;
    for scheme in ["http://", "https://"] {
        if let Some(prefix) = simple.get(..scheme.len()) {
            if prefix.eq_ignore_ascii_case(scheme) {
                simple = &simple[scheme.len()..];
                break;
            }
        }
    }
    simple.trim_end_matches('/').to_string()
}

/// Split a simplified URL at the first `.` into (host, domain_name).
///
/// A URL with no separable domain part is reported as an invalid domain
/// over the whole string.
pub fn split_host_domain(simple: &str) -> Result<(&str, &str), ApiError> {
    match simple.split_once('.') {
        Some((host, domain)) if !host.is_empty() && !domain.is_empty() => Ok((host, domain)),
        _ => Err(ApiError::InvalidDomain(simple.to_string())),
    }
}
