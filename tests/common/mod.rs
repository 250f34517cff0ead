//! Common test utilities and fixtures
#![allow(dead_code)]

use std::path::{Path, PathBuf};

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use repokeeper::config::Config;
use repokeeper::server::{AppState, router};
use tower::util::ServiceExt;
use url::Url;

pub const TEST_TOKEN: &str = "test-token";

pub const CREATED_EVENT: &str = r#"{"action":"created","repository":{"full_name":"org/repo"}}"#;

/// Path of a template shipped at the crate root
pub fn template_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(name)
}

/// Read a shipped template, as GitHub should receive it
pub fn template_bytes(name: &str) -> Vec<u8> {
    std::fs::read(template_path(name)).expect("Failed to read template")
}

/// Configuration pointing at `api_base` and the shipped templates
pub fn test_config(api_base: &str) -> Config {
    Config {
        token: TEST_TOKEN.to_string(),
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        api_base: Url::parse(api_base).expect("Invalid API base"),
        branch_protection_payload: template_path("payload_branch_protection.json"),
        issue_payload: template_path("payload_create_issue.json"),
    }
}

pub fn test_router(config: Config) -> Router {
    router(AppState::new(config))
}

/// Send a request through the router and return the status and body text
pub async fn call(app: Router, method: &str, uri: &str, body: Body) -> (StatusCode, String) {
    let response = app
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body)
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}
