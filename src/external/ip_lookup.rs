// ABOUTME: Public IP discovery used by the CLI before writing audit rows
// ABOUTME: Failure yields None; callers that need the address treat that as fatal
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::responses::{build_client, http_error_message, read_json};
use crate::config::IpLookupConfig;
use recipe_core::constants::{messages, service_names};
use recipe_core::errors::{LookupError, LookupResult};
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

/// Resolves the caller's public IP through an `{"ip": "..."}` service
pub struct IpLookupClient {
    config: IpLookupConfig,
    timeout: Duration,
    http_client: Client,
}

impl IpLookupClient {
    /// Create a new IP lookup client with the per-call timeout
    #[must_use]
    pub fn new(config: IpLookupConfig, timeout: Duration) -> Self {
        Self {
            config,
            timeout,
            http_client: build_client(),
        }
    }

    /// Fetch the public IP, reporting why it failed
    ///
    /// # Errors
    ///
    /// Returns a tagged `LookupError` for transport failures, non-success
    /// statuses, or a body without a non-empty `ip` string
    pub async fn fetch_ip(&self) -> LookupResult<String> {
        let response = self
            .http_client
            .get(&self.config.url)
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::upstream(
                Some(status.as_u16()),
                http_error_message(status),
            ));
        }

        let body = read_json(response, messages::INVALID_IP_RESPONSE).await?;
        body.get("ip")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| LookupError::format(messages::INVALID_IP_RESPONSE))
    }

    /// Public IP, or `None` when discovery failed
    pub async fn lookup(&self) -> Option<String> {
        match self.fetch_ip().await {
            Ok(ip) => Some(ip),
            Err(e) => {
                warn!(service = service_names::IP_LOOKUP, "Failed to resolve public IP: {e}");
                None
            }
        }
    }
}
