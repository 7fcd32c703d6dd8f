// ABOUTME: HTTP middleware applied to every route
// ABOUTME: CORS policy and request-id correlation for tracing spans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS configuration
pub mod cors;
/// Request tracing and correlation ids
pub mod tracing;

pub use self::cors::setup_cors;
pub use self::tracing::{make_request_span, REQUEST_ID_HEADER};
