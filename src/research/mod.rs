// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Keyword, competitor and page research
//!
//! All metrics are synthesized: bounded random draws shaped by simple
//! keyword heuristics. The only real I/O is the single page fetch behind
//! URL analysis.
//!
//! ## Pipeline
//!
//! ```text
//! analyze_url:        URL → normalize_url → PageSource::fetch → extract → metrics per term
//! analyze_keyword:    keyword → metrics + related keywords + synthetic SERP
//! analyze_competitor: domain → brand → 5 keyword templates → metrics per template
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let service = ResearchService::new(ResearchConfig::from_env())?;
//! let page = service.analyze_url("example.com").await?;
//! ```

pub mod competitor;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod metrics;
pub mod related;
pub mod serp;
pub mod service;
pub mod types;

pub use config::ResearchConfig;
pub use fetcher::{normalize_url, FetchError, PageFetcher, PageSource};
pub use metrics::{synthesize_metrics, HeuristicMetrics, MetricsProvider};
pub use service::ResearchService;
pub use types::{
    CompetitionLevel, CompetitorAnalysis, CompetitorKeyword, CompetitorProfile, ContentPage,
    ExtractedPage, KeywordAnalysis, KeywordMetrics, RankedToken, ResearchError, SerpResult,
};
