// ABOUTME: Spoonacular recipe API client for the recipe list and per-recipe information
// ABOUTME: Validates ids locally and maps provider statuses to user-visible lookup errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Spoonacular Recipe API Client
//!
//! Two calls are used: the list endpoint (`complexSearch` with
//! `number=10&offset=0`) and `/{id}/information`, whose
//! `extendedIngredients` array drives the nutrition fan-out.
//!
//! # API Reference
//! Spoonacular Food API: <https://spoonacular.com/food-api/docs>

use super::responses::{build_client, error_body_message, http_error_message, read_json};
use super::RecipeProvider;
use crate::config::SpoonacularApiConfig;
use crate::logging::AppLogger;
use async_trait::async_trait;
use recipe_core::constants::{defaults, messages, service_names};
use recipe_core::errors::{LookupError, LookupResult};
use recipe_core::models::{IngredientRef, RecipeSummary};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

/// Raw `/{id}/information` payload, reduced to the fields the proxy reads
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeInformation {
    /// Recipe title
    #[serde(default)]
    pub title: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// HTML summary, surfaced as the recipe description
    #[serde(default)]
    pub summary: String,
    /// Ingredient list in provider order
    #[serde(rename = "extendedIngredients")]
    pub extended_ingredients: Vec<IngredientRef>,
}

/// Spoonacular API client
pub struct SpoonacularClient {
    config: SpoonacularApiConfig,
    timeout: Duration,
    http_client: Client,
}

impl SpoonacularClient {
    /// Create a new Spoonacular client with the per-call timeout
    #[must_use]
    pub fn new(config: SpoonacularApiConfig, timeout: Duration) -> Self {
        Self {
            config,
            timeout,
            http_client: build_client(),
        }
    }

    /// Recipe ids must be non-empty and numeric; checked before any request
    fn validate_id(id: &str) -> LookupResult<u64> {
        id.trim()
            .parse::<u64>()
            .map_err(|_| LookupError::validation(messages::INVALID_RECIPE_ID))
    }

    async fn request_list(&self) -> LookupResult<Vec<RecipeSummary>> {
        let (Some(url), Some(api_key)) = (&self.config.list_url, &self.config.api_key) else {
            return Err(LookupError::configuration(
                messages::SPOONACULAR_CONFIG_MISSING,
            ));
        };

        let response = self
            .http_client
            .get(url)
            .query(&[
                ("apiKey", api_key.clone()),
                ("number", defaults::RECIPE_LIST_NUMBER.to_string()),
                ("offset", defaults::RECIPE_LIST_OFFSET.to_string()),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let message = match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                    messages::INVALID_API_KEY.to_owned()
                }
                StatusCode::TOO_MANY_REQUESTS => messages::RATE_LIMITED.to_owned(),
                _ => error_body_message(response)
                    .await
                    .unwrap_or_else(|| http_error_message(status)),
            };
            return Err(LookupError::upstream(Some(status.as_u16()), message));
        }

        let mut body = read_json(response, messages::INVALID_LIST_RESPONSE).await?;
        let results = match body.get_mut("results").map(Value::take) {
            Some(Value::Array(results)) => results,
            _ => return Err(LookupError::format(messages::INVALID_LIST_RESPONSE)),
        };
        if results.is_empty() {
            return Err(LookupError::upstream(None, messages::NO_RECIPES_FOUND));
        }

        results
            .into_iter()
            .map(serde_json::from_value::<RecipeSummary>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                debug!("Recipe list entry did not decode: {e}");
                LookupError::format(messages::INVALID_LIST_RESPONSE)
            })
    }

    async fn request_information(&self, id: u64) -> LookupResult<RecipeInformation> {
        let (Some(base), Some(api_key)) = (&self.config.recipes_url, &self.config.api_key) else {
            return Err(LookupError::configuration(
                messages::SPOONACULAR_CONFIG_MISSING,
            ));
        };

        let url = format!("{}/{id}/information", base.trim_end_matches('/'));
        let response = self
            .http_client
            .get(&url)
            .query(&[("apiKey", api_key.as_str())])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::upstream(
                Some(status.as_u16()),
                format!(
                    "Spoonacular API error: {}",
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        let body = read_json(response, messages::INVALID_RECIPE_RESPONSE).await?;
        if !body.get("extendedIngredients").is_some_and(Value::is_array) {
            return Err(LookupError::format(messages::INVALID_RECIPE_RESPONSE));
        }

        serde_json::from_value(body).map_err(|e| {
            debug!(recipe_id = id, "Recipe information did not decode: {e}");
            LookupError::format(messages::INVALID_RECIPE_RESPONSE)
        })
    }
}

#[async_trait]
impl RecipeProvider for SpoonacularClient {
    async fn fetch_list(&self) -> LookupResult<Vec<RecipeSummary>> {
        let started = Instant::now();
        let result = self.request_list().await;
        AppLogger::log_provider_call(
            service_names::SPOONACULAR,
            "fetch_list",
            result.is_ok(),
            started.elapsed().as_millis() as u64,
        );
        result
    }

    async fn fetch_by_id(&self, id: &str) -> LookupResult<RecipeInformation> {
        let id = Self::validate_id(id)?;

        let started = Instant::now();
        let result = self.request_information(id).await;
        AppLogger::log_provider_call(
            service_names::SPOONACULAR,
            "fetch_by_id",
            result.is_ok(),
            started.elapsed().as_millis() as u64,
        );
        result
    }
}
