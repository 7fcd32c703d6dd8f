// ABOUTME: Supabase PostgREST client writing one audit row per request
// ABOUTME: Insert-only; failures are returned to the audit route and never touch other endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::responses::{build_client, error_body_message, http_error_message, read_json};
use super::AuditStore;
use crate::config::SupabaseConfig;
use crate::logging::AppLogger;
use async_trait::async_trait;
use recipe_core::constants::messages;
use recipe_core::errors::{LookupError, LookupResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

/// One audit row: who asked and what they were shown
///
/// The `timestamp` column is filled by the database default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Caller's public IP as reported by the client
    pub user_ip: String,
    /// Arbitrary JSON object describing the request
    pub user_data: Value,
}

/// Supabase audit store client
pub struct SupabaseClient {
    config: SupabaseConfig,
    timeout: Duration,
    http_client: Client,
}

impl SupabaseClient {
    /// Create a new Supabase client with the per-call timeout
    #[must_use]
    pub fn new(config: SupabaseConfig, timeout: Duration) -> Self {
        Self {
            config,
            timeout,
            http_client: build_client(),
        }
    }

    async fn insert(&self, entry: &AuditEntry) -> LookupResult<Value> {
        let (Some(url), Some(key)) = (&self.config.url, &self.config.anon_key) else {
            return Err(LookupError::configuration(messages::SUPABASE_CONFIG_MISSING));
        };

        let endpoint = format!(
            "{}/rest/v1/{}",
            url.trim_end_matches('/'),
            self.config.table
        );
        let response = self
            .http_client
            .post(&endpoint)
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=representation")
            .json(&[entry])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = error_body_message(response)
                .await
                .unwrap_or_else(|| http_error_message(status));
            return Err(LookupError::upstream(Some(status.as_u16()), message));
        }

        read_json(response, messages::UNEXPECTED_ERROR).await
    }
}

#[async_trait]
impl AuditStore for SupabaseClient {
    async fn record(&self, entry: &AuditEntry) -> LookupResult<Value> {
        let result = self.insert(entry).await;
        AppLogger::log_audit_write(&entry.user_ip, result.is_ok());
        result
    }
}
