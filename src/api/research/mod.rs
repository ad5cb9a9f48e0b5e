// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Research API endpoints
//!
//! Provides `/api/keyword-research`, `/api/competitor-analysis` and
//! `/analyze`.

pub mod handler;
pub mod request;

pub use handler::{analyze_url_handler, competitor_analysis_handler, keyword_research_handler};
pub use request::{AnalyzeUrlQuery, CompetitorRequest, KeywordRequest};
