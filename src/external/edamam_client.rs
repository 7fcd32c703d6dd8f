// ABOUTME: Edamam nutrition API client resolving ingredient descriptions to calories
// ABOUTME: One request per lookup with its own timeout; every failure is a returned value
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Edamam Nutrition Data API Client
//!
//! Resolves a free-text ingredient description (`"2 cup rice"`) to a
//! calorie count. Credentials are checked on every call; their absence is
//! reported as `"Missing credentials"` rather than failing startup.
//!
//! # API Reference
//! Edamam Nutrition Analysis API: <https://developer.edamam.com/edamam-docs-nutrition-api>
//!
//! # Example
//! ```rust,no_run
//! use std::time::Duration;
//! use recipe_proxy::config::EdamamApiConfig;
//! use recipe_proxy::external::{EdamamClient, NutritionLookup};
//!
//! # async fn example() {
//! let config = EdamamApiConfig {
//!     base_url: "https://api.edamam.com/api/nutrition-data".to_owned(),
//!     app_id: Some("your_app_id".to_owned()),
//!     app_key: Some("your_app_key".to_owned()),
//! };
//!
//! let client = EdamamClient::new(config, Duration::from_secs(5));
//! match client.lookup("1 cup rice").await {
//!     Ok(facts) => println!("{} kcal", facts.calories),
//!     Err(e) => println!("lookup failed: {e}"),
//! }
//! # }
//! ```

use super::responses::read_json;
use super::NutritionLookup;
use crate::config::EdamamApiConfig;
use crate::logging::AppLogger;
use async_trait::async_trait;
use recipe_core::constants::{messages, service_names};
use recipe_core::errors::{LookupError, LookupResult};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::{Duration, Instant};
use tracing::debug;

/// Nutrition resolved for one ingredient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionFacts {
    /// Kilocalories for the described quantity
    pub calories: f64,
}

/// Edamam nutrition data client
pub struct EdamamClient {
    config: EdamamApiConfig,
    timeout: Duration,
    http_client: Client,
}

impl EdamamClient {
    /// Create a new Edamam client with the per-call timeout
    #[must_use]
    pub fn new(config: EdamamApiConfig, timeout: Duration) -> Self {
        Self {
            config,
            timeout,
            http_client: super::responses::build_client(),
        }
    }

    async fn request(&self, description: &str) -> LookupResult<NutritionFacts> {
        let (Some(app_id), Some(app_key)) = (&self.config.app_id, &self.config.app_key) else {
            return Err(LookupError::configuration(messages::MISSING_CREDENTIALS));
        };

        let response = self
            .http_client
            .get(&self.config.base_url)
            .query(&[
                ("app_id", app_id.as_str()),
                ("app_key", app_key.as_str()),
                ("ingr", description),
            ])
            .timeout(self.timeout)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::upstream(
                Some(status.as_u16()),
                format!(
                    "API error: {} - {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            ));
        }

        let body = read_json(response, messages::INVALID_NUTRITION_FORMAT).await?;
        let calories = body
            .get("calories")
            .and_then(Value::as_f64)
            .ok_or_else(|| LookupError::format(messages::INVALID_NUTRITION_FORMAT))?;

        Ok(NutritionFacts { calories })
    }
}

#[async_trait]
impl NutritionLookup for EdamamClient {
    async fn lookup(&self, description: &str) -> LookupResult<NutritionFacts> {
        let description = description.trim();
        if description.is_empty() {
            return Err(LookupError::validation(messages::INVALID_INGREDIENT));
        }

        let started = Instant::now();
        let result = self.request(description).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(facts) => {
                debug!(ingredient = %description, calories = facts.calories, "Nutrition resolved");
                AppLogger::log_provider_call(service_names::EDAMAM, "lookup", true, elapsed_ms);
            }
            Err(e) => {
                AppLogger::log_provider_call(service_names::EDAMAM, "lookup", false, elapsed_ms);
                AppLogger::log_absorbed_failure(service_names::EDAMAM, description, e);
            }
        }

        result
    }
}
