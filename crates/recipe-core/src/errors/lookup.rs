// ABOUTME: Tagged result type returned by every outbound provider call
// ABOUTME: LookupError carries the failure taxonomy and the exact user-visible message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Lookup Errors
//!
//! Every external call (recipe provider, nutrition provider, audit store,
//! IP discovery) returns a [`LookupResult`] instead of panicking or bubbling
//! a transport error. The `Display` output of each variant is the message
//! that ends up in the `{"error": ...}` body, so it must stay stable.

use crate::constants::messages;
use thiserror::Error;

/// Result of an outbound lookup: either the value or a tagged failure
pub type LookupResult<T> = Result<T, LookupError>;

/// Failure of a single outbound call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Required credentials or endpoints are not configured
    #[error("{0}")]
    Configuration(String),
    /// Caller-supplied input was malformed; no request was sent
    #[error("{0}")]
    Validation(String),
    /// Provider answered with a non-success status
    #[error("{message}")]
    Upstream {
        /// HTTP status, when the failure came from a response
        status: Option<u16>,
        /// Provider message or a generic HTTP description
        message: String,
    },
    /// The per-call timeout elapsed
    #[error("Request timed out")]
    Timeout,
    /// The provider could not be reached at all
    #[error("No internet connection")]
    Connectivity,
    /// The provider answered but the payload had an unexpected shape
    #[error("{0}")]
    Format(String),
    /// Any other transport failure
    #[error("{0}")]
    Transport(String),
}

impl LookupError {
    /// Missing credentials or endpoint
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Malformed caller input
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Non-success provider status
    #[must_use]
    pub fn upstream(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Upstream {
            status,
            message: message.into(),
        }
    }

    /// Unexpected payload shape
    #[must_use]
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Unclassified transport failure; an empty message falls back to a generic one
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.is_empty() {
            Self::Transport(messages::UNEXPECTED_ERROR.to_owned())
        } else {
            Self::Transport(message)
        }
    }

    /// True when the failure was caused by the caller rather than a provider
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Upstream HTTP status, if any
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Upstream { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(feature = "provider-errors")]
impl From<reqwest::Error> for LookupError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_connect() {
            Self::Connectivity
        } else {
            Self::transport(error.to_string())
        }
    }
}
