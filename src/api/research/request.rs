// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Research API request types
//!
//! Blank-field checks live in the research service so every caller gets
//! the same errors.

use serde::{Deserialize, Serialize};

/// Request body for POST /api/keyword-research
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordRequest {
    pub keyword: String,
}

/// Request body for POST /api/competitor-analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompetitorRequest {
    pub domain: String,
}

/// Query string for GET /analyze
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeUrlQuery {
    /// Page to analyse; a missing parameter is treated as empty
    #[serde(default)]
    pub url: Option<String>,
}

impl AnalyzeUrlQuery {
    pub fn url(&self) -> &str {
        self.url.as_deref().unwrap_or_default()
    }
}
