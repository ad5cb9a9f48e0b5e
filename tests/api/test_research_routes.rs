// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! Route tests for the research API
//!
//! These tests verify that:
//! - Every route is registered with the right method
//! - Successful responses carry the expected JSON shape
//! - Blank and malformed inputs map to 400 with an ErrorResponse body
//! - Fetch failures are reported as client errors

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    Router,
};
use seo_research_node::{
    api::{create_app, AppState, ErrorResponse},
    research::{FetchError, HeuristicMetrics, PageSource, ResearchConfig, ResearchService},
};
use serde_json::Value;
use std::sync::Arc;
use tower::util::ServiceExt; // for `oneshot`

/// Serves canned markup, or a 502 for URLs containing "broken"
struct FixturePages;

#[async_trait]
impl PageSource for FixturePages {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        if url.contains("broken") {
            return Err(FetchError::HttpStatus {
                status: 502,
                url: url.to_string(),
            });
        }
        Ok(r#"<html><head><title>Fixture</title>
<meta name="description" content="Fixture page."></head>
<body>alpha beta gamma alpha beta alpha</body></html>"#
            .to_string())
    }

    fn name(&self) -> &'static str {
        "fixture"
    }
}

/// Helper: app with seeded randomness and no simulated latency
fn setup_app() -> Router {
    let config = ResearchConfig {
        rng_seed: Some(2024),
        ..ResearchConfig::immediate()
    };
    let service =
        ResearchService::with_components(config, Arc::new(HeuristicMetrics), Arc::new(FixturePages));
    create_app(AppState::new(service))
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_index_and_health() {
    let (status, json) = send(setup_app(), get("/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "SEO Research API");
    assert_eq!(json["endpoints"]["keyword_research"], "/api/keyword-research");

    let (status, json) = send(setup_app(), get("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
}

#[tokio::test]
async fn test_stats_route() {
    let (status, json) = send(setup_app(), get("/api/stats")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["uptime"], "99.9%");
    assert!(json["total_requests"].as_u64().unwrap() >= 1000);
}

#[tokio::test]
async fn test_keyword_research_route() {
    let (status, json) = send(
        setup_app(),
        post_json("/api/keyword-research", r#"{"keyword": "  seo tool "}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["keyword"], "seo tool");
    assert_eq!(json["related_keywords"].as_array().unwrap().len(), 6);
    assert_eq!(json["related_keywords"][4], "seo tool for beginners");

    let serp = json["serp_results"].as_array().unwrap();
    assert_eq!(serp.len(), 10);
    assert_eq!(serp[0]["position"], 1);
    assert_eq!(serp[9]["position"], 10);

    let difficulty = json["difficulty"].as_u64().unwrap();
    assert!((20..=90).contains(&difficulty));
    assert!(json["analysis_timestamp"].is_string());
}

#[tokio::test]
async fn test_keyword_research_rejects_blank() {
    let (status, json) = send(
        setup_app(),
        post_json("/api/keyword-research", r#"{"keyword": "   "}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(json).unwrap();
    assert_eq!(error.error_type, "empty_input");
    assert_eq!(error.message, "Keyword cannot be empty");
    assert!(error.request_id.is_some());
}

#[tokio::test]
async fn test_keyword_research_rejects_get() {
    let (status, _) = send(setup_app(), get("/api/keyword-research")).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_competitor_route() {
    let (status, json) = send(
        setup_app(),
        post_json("/api/competitor-analysis", r#"{"domain": "example.com"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["domain"], "example.com");
    assert_eq!(json["top_keywords"].as_array().unwrap().len(), 5);
    assert_eq!(json["top_keywords"][0]["keyword"], "example review");
    assert_eq!(json["content_pages"][2]["url"], "https://example.com/landing-page-3");
    let authority = json["domain_authority"].as_u64().unwrap();
    assert!((30..=90).contains(&authority));
}

#[tokio::test]
async fn test_competitor_route_errors() {
    for (body, error_type) in [
        (r#"{"domain": ""}"#, "empty_input"),
        (r#"{"domain": "nodothere"}"#, "invalid_domain_format"),
        (r#"{"domain": "bad_domain.com"}"#, "invalid_domain_format"),
    ] {
        let (status, json) = send(setup_app(), post_json("/api/competitor-analysis", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", body);
        assert_eq!(json["error_type"], error_type, "{}", body);
    }
}

#[tokio::test]
async fn test_analyze_route() {
    let (status, json) = send(setup_app(), get("/analyze?url=example.com")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["url"], "https://example.com");
    assert_eq!(json["title"], "Fixture");
    assert_eq!(json["meta_description"], "Fixture page.");
    assert_eq!(json["word_count"], 7);

    let top = json["top_keywords"].as_array().unwrap();
    assert_eq!(top[0]["keyword"], "alpha");
    assert_eq!(top[0]["frequency"], 3);
    assert_eq!(top[1]["keyword"], "beta");
    assert!(top[0]["cpc"].is_f64());
}

#[tokio::test]
async fn test_analyze_route_errors() {
    let (status, json) = send(setup_app(), get("/analyze")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_type"], "empty_input");

    let (status, json) = send(setup_app(), get("/analyze?url=https%3A%2F%2F")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_type"], "invalid_url_format");

    let (status, json) = send(setup_app(), get("/analyze?url=broken.example.com")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error_type"], "fetch_error");
    assert_eq!(json["details"]["upstream_status"], 502);
}
