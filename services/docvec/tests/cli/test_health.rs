//! Tests for the health command

use crate::common::{create_test_services, services_for_url};
use docvec::cli::commands::health::{execute, HealthArgs};
use docvec::cli::OutputFormat;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_health_ok() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "ok"})))
        .mount(&server)
        .await;

    let services = services_for_url(&server.uri());

    execute(HealthArgs {}, &services, OutputFormat::Human)
        .await
        .unwrap();
    execute(HealthArgs {}, &services, OutputFormat::Json)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_health_unreachable_is_error() {
    let services = create_test_services();

    let err = execute(HealthArgs {}, &services, OutputFormat::Json)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("API health check failed"));
}
