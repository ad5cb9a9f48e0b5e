// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Research API endpoint handlers

use axum::{
    extract::{Query, State},
    Json,
};
use tracing::{debug, info};

use super::request::{AnalyzeUrlQuery, CompetitorRequest, KeywordRequest};
use crate::api::errors::ApiError;
use crate::api::http_server::AppState;
use crate::research::{CompetitorAnalysis, ExtractedPage, KeywordAnalysis};

/// POST /api/keyword-research - Synthesize metrics for a keyword
///
/// # Request
/// - `keyword`: Keyword or phrase (required, non-blank)
///
/// # Response
/// - `keyword`, `search_volume`, `difficulty`, `cpc`, `competition`
/// - `related_keywords`: 6 templated phrases
/// - `serp_results`: 10 synthetic results, positions 1..10
/// - `analysis_timestamp`
///
/// # Errors
/// - 400 Bad Request: blank keyword
pub async fn keyword_research_handler(
    State(state): State<AppState>,
    Json(request): Json<KeywordRequest>,
) -> Result<Json<KeywordAnalysis>, ApiError> {
    debug!("Keyword research request: {:?}", request.keyword);

    let analysis = state.research.analyze_keyword(&request.keyword).await?;
    Ok(Json(analysis))
}

/// POST /api/competitor-analysis - Synthesize a competitor profile
///
/// # Errors
/// - 400 Bad Request: blank or malformed domain
pub async fn competitor_analysis_handler(
    State(state): State<AppState>,
    Json(request): Json<CompetitorRequest>,
) -> Result<Json<CompetitorAnalysis>, ApiError> {
    debug!("Competitor analysis request: {:?}", request.domain);

    let analysis = state.research.analyze_competitor(&request.domain).await?;
    Ok(Json(analysis))
}

/// GET /analyze?url=... - Fetch a page and rank its terms
///
/// A URL without a scheme is fetched over https.
///
/// # Errors
/// - 400 Bad Request: missing/blank or unparseable URL, or the fetch
///   failed (transport error, timeout, non-success status)
pub async fn analyze_url_handler(
    State(state): State<AppState>,
    Query(query): Query<AnalyzeUrlQuery>,
) -> Result<Json<ExtractedPage>, ApiError> {
    let page = state.research.analyze_url(query.url()).await?;

    info!(
        "URL analysis complete: {} ({} words, {} ranked terms)",
        page.url,
        page.word_count,
        page.top_tokens.len()
    );
    Ok(Json(page))
}
