// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Research service orchestration
//!
//! Validates inputs and runs each request through the pipeline. Every
//! request gets its own random source, so concurrent requests never share
//! mutable state.

use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::competitor::synthesize_competitor;
use super::config::ResearchConfig;
use super::extractor::extract;
use super::fetcher::{normalize_url, FetchError, PageFetcher, PageSource};
use super::metrics::{HeuristicMetrics, MetricsProvider};
use super::related::generate_related_keywords;
use super::serp::synthesize_serp;
use super::types::{CompetitorAnalysis, ExtractedPage, KeywordAnalysis, ResearchError};

/// Entry point for keyword, competitor and URL analysis
#[derive(Clone)]
pub struct ResearchService {
    config: ResearchConfig,
    metrics: Arc<dyn MetricsProvider>,
    source: Arc<dyn PageSource>,
}

impl ResearchService {
    /// Create a service with heuristic metrics and the HTTP page fetcher
    pub fn new(config: ResearchConfig) -> Result<Self, FetchError> {
        let fetcher = PageFetcher::new(&config)?;
        Ok(Self::with_components(
            config,
            Arc::new(HeuristicMetrics),
            Arc::new(fetcher),
        ))
    }

    /// Create a service from explicit parts
    pub fn with_components(
        config: ResearchConfig,
        metrics: Arc<dyn MetricsProvider>,
        source: Arc<dyn PageSource>,
    ) -> Self {
        debug!(
            "Research service using {} metrics and {} page source",
            metrics.name(),
            source.name()
        );
        Self {
            config,
            metrics,
            source,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ResearchConfig {
        &self.config
    }

    /// Random source for one request
    fn request_rng(&self) -> StdRng {
        match self.config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Metrics, related phrases and a synthetic SERP for a keyword
    pub async fn analyze_keyword(&self, keyword: &str) -> Result<KeywordAnalysis, ResearchError> {
        let keyword = require("Keyword", keyword)?;

        simulate_latency(self.config.keyword_delay_ms).await;

        let mut rng = self.request_rng();
        let metrics = self.metrics.metrics(keyword, &mut rng);

        info!(
            "Keyword analysis for '{}': volume {}, difficulty {}",
            keyword, metrics.search_volume, metrics.difficulty
        );

        Ok(KeywordAnalysis {
            keyword: keyword.to_string(),
            metrics,
            related_keywords: generate_related_keywords(keyword),
            serp_results: synthesize_serp(keyword),
            analysis_timestamp: timestamp(),
        })
    }

    /// Synthesized competitive profile for a domain
    pub async fn analyze_competitor(
        &self,
        domain: &str,
    ) -> Result<CompetitorAnalysis, ResearchError> {
        let domain = require("Domain", domain)?;

        let mut rng = self.request_rng();
        let profile = synthesize_competitor(domain, self.metrics.as_ref(), &mut rng)
            .inspect_err(|e| warn!("Competitor analysis rejected: {}", e))?;

        simulate_latency(self.config.competitor_delay_ms).await;

        info!(
            "Competitor analysis for {}: traffic {}, authority {}",
            profile.domain, profile.traffic_estimate, profile.domain_authority
        );

        Ok(CompetitorAnalysis {
            profile,
            analysis_timestamp: timestamp(),
        })
    }

    /// Fetch a page and rank its most frequent terms
    pub async fn analyze_url(&self, url: &str) -> Result<ExtractedPage, ResearchError> {
        let url = require("URL", url)?;
        let url = normalize_url(url).inspect_err(|e| warn!("URL rejected: {}", e))?;

        let raw = self
            .source
            .fetch(&url)
            .await
            .inspect_err(|e| warn!("Fetch failed for {}: {}", url, e))?;

        let extracted = extract(&raw, self.config.max_top_tokens);
        debug!(
            "Extracted {} tokens ({} ranked) from {}",
            extracted.word_count,
            extracted.top_terms.len(),
            url
        );

        let mut rng = self.request_rng();
        Ok(extracted.into_page(&url, self.metrics.as_ref(), &mut rng))
    }
}

/// Trimmed input, or EmptyInput when nothing is left
fn require<'a>(field: &'static str, value: &'a str) -> Result<&'a str, ResearchError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        warn!("{} cannot be empty", field);
        return Err(ResearchError::EmptyInput { field });
    }
    Ok(trimmed)
}

async fn simulate_latency(delay_ms: u64) {
    if delay_ms > 0 {
        tokio::time::sleep(Duration::from_millis(delay_ms)).await;
    }
}

/// UTC wall clock in `YYYY-MM-DD HH:MM:SS`
fn timestamp() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
