// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
pub mod errors;
pub mod handlers;
pub mod http_server;
pub mod research;

pub use errors::{ApiError, ErrorResponse};
pub use handlers::{HealthResponse, IndexResponse, StatsResponse};
pub use http_server::{create_app, start_server, ApiConfig, AppState};
pub use research::{AnalyzeUrlQuery, CompetitorRequest, KeywordRequest};
