// ABOUTME: Unified error handling for the HTTP boundary of the recipe proxy
// ABOUTME: Maps tagged lookup failures onto error codes, status codes, and JSON bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Leaf clients speak [`LookupError`]. The HTTP boundary is the only place a
//! failure becomes a status code; it does so through [`AppError`], whose
//! [`ErrorCode`] decides the status and whose message becomes the
//! `{"error": ...}` body.

/// Tagged results for outbound calls
pub mod lookup;

pub use lookup::{LookupError, LookupResult};

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[cfg(feature = "http-response")]
use axum::{
    response::{IntoResponse, Response},
    Json,
};
#[cfg(feature = "http-response")]
use http::StatusCode;

/// Standard error codes used at the HTTP boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // Validation
    /// Malformed id or request body
    InvalidInput,

    // Configuration
    /// Required credentials are not configured
    ConfigMissing,

    // External services
    /// Provider answered with a non-success status
    ExternalServiceError,
    /// Provider did not answer within the timeout
    ExternalTimeout,
    /// Provider could not be reached
    ExternalServiceUnavailable,
    /// Provider payload had an unexpected shape
    ExternalInvalidResponse,

    // Internal
    /// Anything else
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::ConfigMissing
            | Self::ExternalServiceError
            | Self::ExternalTimeout
            | Self::ExternalServiceUnavailable
            | Self::ExternalInvalidResponse
            | Self::InternalError => 500,
        }
    }

    /// Short description used in log lines
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::ConfigMissing => "Required configuration is missing",
            Self::ExternalServiceError => "An external service encountered an error",
            Self::ExternalTimeout => "An external service timed out",
            Self::ExternalServiceUnavailable => "An external service is currently unavailable",
            Self::ExternalInvalidResponse => "An external service returned an unexpected payload",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the HTTP boundary
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Message placed in the response body
    pub message: String,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid input (400)
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Get the HTTP status code for this error
    #[must_use]
    pub const fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

impl From<LookupError> for AppError {
    fn from(error: LookupError) -> Self {
        let code = match &error {
            LookupError::Validation(_) => ErrorCode::InvalidInput,
            LookupError::Configuration(_) => ErrorCode::ConfigMissing,
            LookupError::Upstream { .. } => ErrorCode::ExternalServiceError,
            LookupError::Timeout => ErrorCode::ExternalTimeout,
            LookupError::Connectivity => ErrorCode::ExternalServiceUnavailable,
            LookupError::Format(_) => ErrorCode::ExternalInvalidResponse,
            LookupError::Transport(_) => ErrorCode::InternalError,
        };
        Self::new(code, error.to_string())
    }
}

/// HTTP error body: `{"error": "<message>"}`
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable failure message
    pub error: String,
}

impl From<AppError> for ErrorResponse {
    fn from(error: AppError) -> Self {
        Self {
            error: error.message,
        }
    }
}

#[cfg(feature = "http-response")]
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::warn!(code = ?self.code, message = %self.message, "Request failed");
        } else {
            tracing::debug!(code = ?self.code, message = %self.message, "Request rejected");
        }

        (status, Json(ErrorResponse::from(self))).into_response()
    }
}
