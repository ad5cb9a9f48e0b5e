// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Core value types for keyword, competitor and page research
//!
//! All of these are request-scoped: built once while handling a single
//! request and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::fetcher::FetchError;

/// Advertiser competition tier for a keyword
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompetitionLevel {
    Low,
    Medium,
    High,
}

impl CompetitionLevel {
    /// All tiers, in draw order
    pub const ALL: [CompetitionLevel; 3] = [Self::Low, Self::Medium, Self::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for CompetitionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Synthesized SEO metrics for a single keyword
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordMetrics {
    /// Monthly searches; may fall below 100 for long-tail phrases
    pub search_volume: u32,
    /// Ranking difficulty, always within [20, 90]
    pub difficulty: u32,
    /// Cost per click in dollars, within [0.50, 15.00], two decimals
    pub cpc: f64,
    pub competition: CompetitionLevel,
}

/// A frequent page term together with its synthesized metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedToken {
    #[serde(rename = "keyword")]
    pub text: String,
    pub frequency: u32,
    #[serde(flatten)]
    pub metrics: KeywordMetrics,
}

/// Result of analysing a single fetched page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedPage {
    /// Normalized (scheme-prefixed) URL that was fetched
    pub url: String,
    pub title: String,
    pub meta_description: String,
    /// Total token count, duplicates included
    pub word_count: usize,
    /// At most ten tokens, most frequent first
    #[serde(rename = "top_keywords")]
    pub top_tokens: Vec<RankedToken>,
}

/// One ranked keyword in a competitor profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorKeyword {
    pub keyword: String,
    /// SERP position, 1..=10
    pub position: u32,
    pub search_volume: u32,
    pub difficulty: u32,
    /// Share of domain traffic in percent, 5.0..=25.0, one decimal
    pub traffic_share: f64,
}

/// One synthetic top page of a competitor domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentPage {
    pub url: String,
    pub title: String,
    pub traffic_estimate: u32,
    pub top_keyword: String,
    pub content_type: String,
}

/// Synthesized competitive profile for a domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorProfile {
    pub domain: String,
    pub traffic_estimate: u32,
    pub top_keywords: Vec<CompetitorKeyword>,
    pub content_pages: Vec<ContentPage>,
    pub backlink_estimate: u32,
    /// Domain authority, 30..=90
    pub domain_authority: u32,
}

/// A single entry of the synthetic search results page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SerpResult {
    pub position: u32,
    pub title: String,
    pub url: String,
    pub description: String,
}

/// Full response for a keyword research request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordAnalysis {
    pub keyword: String,
    #[serde(flatten)]
    pub metrics: KeywordMetrics,
    pub related_keywords: Vec<String>,
    pub serp_results: Vec<SerpResult>,
    pub analysis_timestamp: String,
}

/// Competitor profile stamped with the time it was produced
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompetitorAnalysis {
    #[serde(flatten)]
    pub profile: CompetitorProfile,
    pub analysis_timestamp: String,
}

/// Errors surfaced by the research pipeline
///
/// Every variant is a client-facing, non-retryable failure.
#[derive(Debug, Error)]
pub enum ResearchError {
    /// A required input was blank after trimming
    #[error("{field} cannot be empty")]
    EmptyInput {
        /// Name of the blank field
        field: &'static str,
    },

    /// Domain did not match `name.tld`
    #[error("Invalid domain format: {domain}")]
    InvalidDomainFormat {
        /// The rejected domain
        domain: String,
    },

    /// URL had no parseable scheme and host
    #[error("Invalid URL format: {url}")]
    InvalidUrlFormat {
        /// The rejected URL
        url: String,
    },

    /// Page retrieval failed
    #[error("Error analyzing URL: {0}")]
    Fetch(#[from] FetchError),
}

impl ResearchError {
    /// Stable machine-readable discriminator
    pub fn kind(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => "empty_input",
            Self::InvalidDomainFormat { .. } => "invalid_domain_format",
            Self::InvalidUrlFormat { .. } => "invalid_url_format",
            Self::Fetch(_) => "fetch_error",
        }
    }
}
