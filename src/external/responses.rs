// ABOUTME: Response helpers shared by the outbound provider clients
// ABOUTME: Builds per-client reqwest clients and turns responses into tagged lookup results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::errors::{LookupError, LookupResult};
use reqwest::{Client, ClientBuilder, Response, StatusCode};
use serde_json::Value;
use std::time::Duration;

/// Connection timeout for every outbound client
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Build the HTTP client owned by one provider client
///
/// The overall per-call timeout is set on each request rather than here so
/// that every call carries its own independent deadline.
#[must_use]
pub fn build_client() -> Client {
    ClientBuilder::new()
        .connect_timeout(CONNECT_TIMEOUT)
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Generic description of a non-success status: `HTTP error 404: Not Found`
#[must_use]
pub fn http_error_message(status: StatusCode) -> String {
    format!(
        "HTTP error {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or("Unknown")
    )
}

/// Decode a JSON body, reporting undecodable payloads with `format_message`
///
/// # Errors
///
/// Returns `LookupError::Format` for invalid JSON, or the classified
/// transport error if reading the body failed
pub async fn read_json(response: Response, format_message: &str) -> LookupResult<Value> {
    response.json::<Value>().await.map_err(|e| {
        if e.is_decode() {
            LookupError::format(format_message)
        } else {
            LookupError::from(e)
        }
    })
}

/// Best-effort `message` (or `error`) field from an error body
pub async fn error_body_message(response: Response) -> Option<String> {
    let body = response.json::<Value>().await.ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_owned)
        .filter(|message| !message.is_empty())
}
