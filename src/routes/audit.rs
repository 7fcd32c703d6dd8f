// ABOUTME: Audit route handler writing one request-log row to the audit store
// ABOUTME: Validates the {user_Ip, data} body before any outbound call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::external::AuditEntry;
use crate::resources::ServerResources;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use recipe_core::constants::messages;
use recipe_core::errors::AppError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

/// Successful audit write
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditSavedResponse {
    /// Always `"Data saved successfully"`
    pub message: String,
    /// Rows as returned by the store
    pub saved_data: Value,
}

/// Audit routes
pub struct AuditRoutes;

impl AuditRoutes {
    /// Create all audit routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/supabase", post(Self::handle_record))
            .with_state(resources)
    }

    /// Validate the raw body into an audit row
    ///
    /// The body is parsed by hand so malformed JSON still gets an
    /// `{"error": ...}` response instead of the extractor's plain-text rejection.
    fn parse_entry(body: &[u8]) -> Result<AuditEntry, AppError> {
        let mut payload: Value = serde_json::from_slice(body)
            .map_err(|_| AppError::invalid_input(messages::INVALID_USER_IP))?;

        let user_ip = payload
            .get("user_Ip")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|ip| !ip.is_empty())
            .map(str::to_owned)
            .ok_or_else(|| AppError::invalid_input(messages::INVALID_USER_IP))?;

        let user_data = match payload.get_mut("data").map(Value::take) {
            Some(data @ Value::Object(_)) => data,
            _ => return Err(AppError::invalid_input(messages::INVALID_AUDIT_DATA)),
        };

        Ok(AuditEntry { user_ip, user_data })
    }

    /// Handle one audit write
    async fn handle_record(
        State(resources): State<Arc<ServerResources>>,
        body: Bytes,
    ) -> Result<Response, AppError> {
        let entry = Self::parse_entry(&body)?;
        let saved_data = resources.audit.record(&entry).await?;

        Ok((
            StatusCode::OK,
            Json(AuditSavedResponse {
                message: messages::AUDIT_SAVED.to_owned(),
                saved_data,
            }),
        )
            .into_response())
    }
}
