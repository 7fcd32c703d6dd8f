// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for the browser front end
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

use crate::config::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings for the proxy
///
/// Origins come from `CORS_ALLOWED_ORIGINS`: `*` (or empty) allows any
/// origin, otherwise a comma-separated list is used.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://recipes.example.com,http://localhost:3000"
/// ```
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin = parse_allowed_origins(&config.cors.allowed_origins);

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("x-request-id"),
        ])
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
}

fn parse_allowed_origins(allowed: &str) -> AllowOrigin {
    if allowed.is_empty() || allowed == "*" {
        return AllowOrigin::any();
    }

    let origins: Vec<HeaderValue> = allowed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        // Fallback to any if parsing failed
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    }
}
