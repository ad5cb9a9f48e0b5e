// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

use crate::research::{FetchError, ResearchError};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ErrorResponse {
    pub error_type: String,
    pub message: String,
    pub request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

#[derive(Debug, Clone)]
pub enum ApiError {
    EmptyInput {
        field: String,
    },
    InvalidDomainFormat(String),
    InvalidUrlFormat(String),
    FetchFailed {
        message: String,
        timed_out: bool,
        upstream_status: Option<u16>,
    },
    InternalError(String),
}

impl ApiError {
    pub fn to_response(&self, request_id: Option<String>) -> ErrorResponse {
        let (error_type, message, details) = match self {
            ApiError::EmptyInput { field } => {
                let mut details = HashMap::new();
                details.insert(
                    "field".to_string(),
                    serde_json::Value::String(field.to_lowercase()),
                );
                ("empty_input", format!("{} cannot be empty", field), Some(details))
            }
            ApiError::InvalidDomainFormat(domain) => (
                "invalid_domain_format",
                format!("Invalid domain format: {}", domain),
                None,
            ),
            ApiError::InvalidUrlFormat(url) => (
                "invalid_url_format",
                format!("Invalid URL format: {}", url),
                None,
            ),
            ApiError::FetchFailed {
                message,
                timed_out,
                upstream_status,
            } => {
                let mut details = HashMap::new();
                details.insert(
                    "timed_out".to_string(),
                    serde_json::Value::Bool(*timed_out),
                );
                if let Some(status) = upstream_status {
                    details.insert(
                        "upstream_status".to_string(),
                        serde_json::Value::Number((*status).into()),
                    );
                }
                (
                    "fetch_error",
                    format!("Error analyzing URL: {}", message),
                    Some(details),
                )
            }
            ApiError::InternalError(msg) => ("internal_error", msg.clone(), None),
        };

        ErrorResponse {
            error_type: error_type.to_string(),
            message,
            request_id,
            details,
        }
    }

    /// Every research failure is a client error; only internal faults are 500
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::EmptyInput { .. }
            | ApiError::InvalidDomainFormat(_)
            | ApiError::InvalidUrlFormat(_)
            | ApiError::FetchFailed { .. } => 400,
            ApiError::InternalError(_) => 500,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::EmptyInput { field } => write!(f, "{} cannot be empty", field),
            ApiError::InvalidDomainFormat(domain) => write!(f, "Invalid domain format: {}", domain),
            ApiError::InvalidUrlFormat(url) => write!(f, "Invalid URL format: {}", url),
            ApiError::FetchFailed { message, .. } => write!(f, "Error analyzing URL: {}", message),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ResearchError> for ApiError {
    fn from(error: ResearchError) -> Self {
        match error {
            ResearchError::EmptyInput { field } => ApiError::EmptyInput {
                field: field.to_string(),
            },
            ResearchError::InvalidDomainFormat { domain } => ApiError::InvalidDomainFormat(domain),
            ResearchError::InvalidUrlFormat { url } => ApiError::InvalidUrlFormat(url),
            ResearchError::Fetch(fetch) => {
                let (timed_out, upstream_status) = match &fetch {
                    FetchError::Timeout(_) => (true, None),
                    FetchError::HttpStatus { status, .. } => (false, Some(*status)),
                    FetchError::Http(_) => (false, None),
                };
                ApiError::FetchFailed {
                    message: fetch.to_string(),
                    timed_out,
                    upstream_status,
                }
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = self.to_response(Some(Uuid::new_v4().to_string()));

        (status, Json(body)).into_response()
    }
}
