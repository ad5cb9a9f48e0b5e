// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Configuration for the research pipeline

use std::env;

use super::extractor::MAX_TOP_TOKENS;

/// Configuration for the research pipeline
#[derive(Debug, Clone)]
pub struct ResearchConfig {
    /// Page fetch timeout in seconds (default: 10)
    pub fetch_timeout_secs: u64,
    /// User-Agent header sent with page fetches
    pub user_agent: String,
    /// Maximum redirects followed per fetch (default: 5)
    pub max_redirects: usize,
    /// Ranked terms kept per analysed page (default and cap: 10)
    pub max_top_tokens: usize,
    /// Simulated processing delay for keyword research in ms (default: 500)
    pub keyword_delay_ms: u64,
    /// Simulated processing delay for competitor analysis in ms (default: 800)
    pub competitor_delay_ms: u64,
    /// Fixed seed for every request's random source; fresh entropy when None
    pub rng_seed: Option<u64>,
}

impl ResearchConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            fetch_timeout_secs: env::var("FETCH_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.fetch_timeout_secs),
            user_agent: env::var("FETCH_USER_AGENT").unwrap_or(defaults.user_agent),
            max_redirects: env::var("FETCH_MAX_REDIRECTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_redirects),
            max_top_tokens: env::var("MAX_TOP_TOKENS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_top_tokens)
                .min(MAX_TOP_TOKENS),
            keyword_delay_ms: env::var("KEYWORD_ANALYSIS_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.keyword_delay_ms),
            competitor_delay_ms: env::var("COMPETITOR_ANALYSIS_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.competitor_delay_ms),
            rng_seed: env::var("RESEARCH_RNG_SEED")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Configuration with no simulated latency, for tests and the CLI
    pub fn immediate() -> Self {
        Self {
            keyword_delay_ms: 0,
            competitor_delay_ms: 0,
            ..Self::default()
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.fetch_timeout_secs == 0 {
            return Err("fetch_timeout_secs must be at least 1".to_string());
        }
        if self.max_top_tokens == 0 {
            return Err("max_top_tokens must be at least 1".to_string());
        }
        if self.max_top_tokens > MAX_TOP_TOKENS {
            return Err(format!("max_top_tokens cannot exceed {}", MAX_TOP_TOKENS));
        }
        Ok(())
    }
}

impl Default for ResearchConfig {
    fn default() -> Self {
        Self {
            fetch_timeout_secs: 10,
            user_agent: "Mozilla/5.0 (compatible; SeoResearchBot/1.0)".to_string(),
            max_redirects: 5,
            max_top_tokens: MAX_TOP_TOKENS,
            keyword_delay_ms: 500,
            competitor_delay_ms: 800,
            rng_seed: None,
        }
    }
}
