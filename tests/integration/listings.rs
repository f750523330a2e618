//! Listing commands: spaces, apps, routes, domains.

use crate::integration::test_utils::{make_context, FakeCloudClient, RecordingReporter};
use nimbus::api::SpaceSummary;
use nimbus::cli::{Commands, RunContext};
use nimbus::config::NimbusConfig;
use nimbus::error::ApiError;
use std::path::PathBuf;
use std::sync::Arc;

fn seed_spaces(client: &FakeCloudClient) {
    let mut state = client.state.lock().unwrap();
    state.spaces = vec![
        SpaceSummary {
            name: "bb_second".to_string(),
            app_names: vec!["api".to_string(), "worker".to_string()],
            service_names: vec!["db".to_string()],
            domain_names: vec![],
        },
        SpaceSummary {
            name: "aa_first".to_string(),
            app_names: vec!["web".to_string()],
            service_names: vec![],
            domain_names: vec!["example.com".to_string()],
        },
        SpaceSummary {
            name: "cc_last".to_string(),
            app_names: vec![],
            service_names: vec!["cache".to_string(), "queue".to_string()],
            domain_names: vec![],
        },
    ];
}

fn spaces_command(format: &str, full: bool) -> Commands {
    Commands::Spaces {
        format: format.to_string(),
        full,
    }
}

#[test]
fn test_spaces_listing_is_sorted_with_progress_line() {
    let client = Arc::new(FakeCloudClient::routable());
    seed_spaces(&client);
    let reporter = Arc::new(RecordingReporter::default());
    let context = make_context(client, reporter.clone(), Arc::default());

    let output = context.execute(&spaces_command("text", false)).unwrap();

    let events = reporter.snapshot();
    assert!(events[0].contains("Getting spaces"));
    assert_eq!(events[1], "ok");

    let first = output.find("aa_first").unwrap();
    let second = output.find("bb_second").unwrap();
    let third = output.find("cc_last").unwrap();
    assert!(first < second && second < third, "rows sorted by name");
    assert!(output.contains("web"));
    assert!(output.contains("db"));
}

#[test]
fn test_spaces_listing_empty_shows_only_progress() {
    let client = Arc::new(FakeCloudClient::routable());
    let reporter = Arc::new(RecordingReporter::default());
    let context = make_context(client, reporter.clone(), Arc::default());

    let output = context.execute(&spaces_command("text", false)).unwrap();

    assert!(output.is_empty());
    assert!(reporter.has_step("Getting spaces"));
}

#[test]
fn test_spaces_listing_full_shows_domains() {
    let client = Arc::new(FakeCloudClient::routable());
    seed_spaces(&client);
    let context = make_context(
        client,
        Arc::new(RecordingReporter::default()),
        Arc::default(),
    );

    let output = context.execute(&spaces_command("text", true)).unwrap();

    assert!(output.contains("aa_first:"));
    assert!(output.contains("domains: example.com"));
    assert!(output.contains("services: cache, queue"));
}

#[test]
fn test_spaces_listing_json() {
    let client = Arc::new(FakeCloudClient::routable());
    seed_spaces(&client);
    let context = make_context(
        client,
        Arc::new(RecordingReporter::default()),
        Arc::default(),
    );

    let output = context.execute(&spaces_command("json", false)).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(parsed["total"], 3);
    assert_eq!(parsed["spaces"][0]["name"], "aa_first");
    assert_eq!(parsed["spaces"][1]["services"][0], "db");
}

#[test]
fn test_apps_listing_shows_bound_route_urls() {
    let client = Arc::new(FakeCloudClient::routable());
    let app = client.add_app("foo", &[]);
    let domain = client.add_domain("example.com");
    let route = client.add_route("bar", &domain);
    client.bind(&app, &route);
    let reporter = Arc::new(RecordingReporter::default());
    let context = make_context(client, reporter.clone(), Arc::default());

    let output = context
        .execute(&Commands::Apps {
            format: "text".to_string(),
        })
        .unwrap();

    assert!(reporter.has_step("Getting apps"));
    assert!(output.contains("foo"));
    assert!(output.contains("bar.example.com"));
}

#[test]
fn test_routes_listing() {
    let client = Arc::new(FakeCloudClient::routable());
    let domain = client.add_domain("example.com");
    client.add_route("bar", &domain);
    client.add_route("baz", &domain);
    let reporter = Arc::new(RecordingReporter::default());
    let context = make_context(client, reporter.clone(), Arc::default());

    let output = context
        .execute(&Commands::Routes {
            format: "text".to_string(),
        })
        .unwrap();

    assert!(reporter.has_step("Getting routes in"));
    assert!(reporter.has_step("development"));
    assert!(output.contains("bar"));
    assert!(output.contains("baz"));
    assert!(output.contains("example.com"));
}

#[test]
fn test_domains_listing() {
    let client = Arc::new(FakeCloudClient::routable());
    client.add_domain("example.com");
    client.add_domain("apps.internal");
    let reporter = Arc::new(RecordingReporter::default());
    let context = make_context(client, reporter.clone(), Arc::default());

    let output = context
        .execute(&Commands::Domains {
            format: "text".to_string(),
        })
        .unwrap();

    assert!(reporter.has_step("Getting domains in"));
    assert!(output.contains("apps.internal"));
    assert!(output.contains("example.com"));
    assert!(output.contains("Total: 2 domain(s)"));
}

#[test]
fn test_commands_without_target_fail() {
    let context = RunContext::with_collaborators(
        NimbusConfig::default(),
        PathBuf::from("/nonexistent/nimbus-config.toml"),
        None,
        Arc::new(RecordingReporter::default()),
        Arc::new(crate::integration::test_utils::ScriptedPrompter::default()),
    );

    let result = context.execute(&Commands::Apps {
        format: "text".to_string(),
    });

    assert!(matches!(result, Err(ApiError::NoTarget)));
}
