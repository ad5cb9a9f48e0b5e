// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! PageFetcher tests against a local axum server
//!
//! Verifies that:
//! - A successful fetch returns the raw body
//! - Non-success status codes become FetchError::HttpStatus
//! - Slow responses hit the configured timeout
//! - Unreachable hosts become transport errors

use axum::{http::StatusCode, routing::get, Router};
use seo_research_node::research::{FetchError, PageFetcher, PageSource, ResearchConfig};
use std::net::SocketAddr;
use std::time::Duration;

pub const SAMPLE_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Rust SEO Guide</title>
<meta name="description" content="Learn keyword research with Rust.">
</head>
<body>
<h1>Keyword research</h1>
<p>Keyword research drives content strategy. Research keywords before writing content.</p>
<p>Rust tools make keyword research fast.</p>
</body>
</html>"#;

/// Helper: serve fixture routes on an ephemeral port
pub async fn spawn_fixture_server() -> SocketAddr {
    let app = Router::new()
        .route("/page", get(|| async { SAMPLE_PAGE }))
        .route("/missing", get(|| async { (StatusCode::NOT_FOUND, "gone") }))
        .route(
            "/slow",
            get(|| async {
                tokio::time::sleep(Duration::from_secs(5)).await;
                "too late"
            }),
        );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

fn fast_config() -> ResearchConfig {
    ResearchConfig {
        fetch_timeout_secs: 1,
        ..ResearchConfig::immediate()
    }
}

#[tokio::test]
async fn test_fetch_returns_body() {
    let addr = spawn_fixture_server().await;
    let fetcher = PageFetcher::new(&fast_config()).unwrap();

    let body = fetcher.fetch(&format!("http://{}/page", addr)).await.unwrap();
    assert!(body.contains("<title>Rust SEO Guide</title>"));
}

#[tokio::test]
async fn test_fetch_non_success_status() {
    let addr = spawn_fixture_server().await;
    let fetcher = PageFetcher::new(&fast_config()).unwrap();

    let result = fetcher.fetch(&format!("http://{}/missing", addr)).await;
    match result {
        Err(FetchError::HttpStatus { status, url }) => {
            assert_eq!(status, 404);
            assert!(url.ends_with("/missing"));
        }
        other => panic!("expected HttpStatus, got {:?}", other),
    }
}

#[tokio::test]
async fn test_fetch_times_out() {
    let addr = spawn_fixture_server().await;
    let fetcher = PageFetcher::new(&fast_config()).unwrap();

    let result = fetcher.fetch(&format!("http://{}/slow", addr)).await;
    assert!(
        matches!(result, Err(FetchError::Timeout(_))),
        "expected timeout, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_fetch_unreachable_host() {
    // Bind then drop to get a port nobody is listening on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let fetcher = PageFetcher::new(&fast_config()).unwrap();
    let result = fetcher.fetch(&format!("http://{}/", addr)).await;
    assert!(matches!(
        result,
        Err(FetchError::Http(_)) | Err(FetchError::Timeout(_))
    ));
}
