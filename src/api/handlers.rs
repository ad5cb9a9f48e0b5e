// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Service-level routes: index, health and usage statistics

use axum::Json;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::version;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexResponse {
    pub message: String,
    pub version: String,
    pub endpoints: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    /// Seconds since the Unix epoch
    pub timestamp: f64,
}

/// Synthetic usage counters; nothing is actually tracked
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub total_requests: u32,
    pub keywords_analyzed: u32,
    pub domains_analyzed: u32,
    pub urls_processed: u32,
    pub uptime: String,
    pub avg_response_time: String,
}

impl StatsResponse {
    pub fn synthesize<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            total_requests: rng.gen_range(1_000..=10_000),
            keywords_analyzed: rng.gen_range(500..=5_000),
            domains_analyzed: rng.gen_range(100..=1_000),
            urls_processed: rng.gen_range(200..=2_000),
            uptime: "99.9%".to_string(),
            avg_response_time: format!("{}ms", rng.gen_range(200..=800)),
        }
    }
}

/// GET /
pub async fn index_handler() -> Json<IndexResponse> {
    let endpoints = [
        ("health", "/api/health"),
        ("keyword_research", "/api/keyword-research"),
        ("competitor_analysis", "/api/competitor-analysis"),
        ("url_analyzer", "/analyze"),
        ("stats", "/api/stats"),
    ]
    .into_iter()
    .map(|(name, path)| (name.to_string(), path.to_string()))
    .collect();

    Json(IndexResponse {
        message: "SEO Research API".to_string(),
        version: version::VERSION_NUMBER.to_string(),
        endpoints,
    })
}

/// GET /api/health
pub async fn health_handler() -> Json<HealthResponse> {
    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64())
        .unwrap_or_default();

    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp,
    })
}

/// GET /api/stats
pub async fn stats_handler() -> Json<StatsResponse> {
    Json(StatsResponse::synthesize(&mut rand::thread_rng()))
}
