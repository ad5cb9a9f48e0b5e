// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod api;
pub mod cli;
pub mod research;
pub mod version;

pub use api::{create_app, start_server, ApiConfig, AppState};
pub use research::{
    CompetitionLevel, CompetitorAnalysis, CompetitorProfile, ExtractedPage, KeywordAnalysis,
    KeywordMetrics, RankedToken, ResearchConfig, ResearchError, ResearchService,
};
