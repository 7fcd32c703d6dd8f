// ABOUTME: Recipe route handlers for the list passthrough and the aggregated detail endpoint
// ABOUTME: Translates lookup failures into 400/500 JSON error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Recipe routes
//!
//! - `GET /api/recipes` returns `{results: RecipeSummary[]}`
//! - `GET /api/recipe/:id` returns a `RecipeDetail`
//! - `GET /api/recipe` and `GET /api/recipe/` (no id) are rejected with 400

use crate::resources::ServerResources;
use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use recipe_core::constants::messages;
use recipe_core::errors::AppError;
use recipe_core::models::RecipeSummary;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::info;

/// Response body of the list endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct RecipeListResponse {
    /// Recipes in provider order
    pub results: Vec<RecipeSummary>,
}

/// Recipe routes
pub struct RecipeRoutes;

impl RecipeRoutes {
    /// Create all recipe routes
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/api/recipes", get(Self::handle_list))
            .route("/api/recipe", get(Self::handle_missing_id))
            .route("/api/recipe/", get(Self::handle_missing_id))
            .route("/api/recipe/:id", get(Self::handle_detail))
            .with_state(resources)
    }

    /// Handle the recipe list passthrough
    async fn handle_list(
        State(resources): State<Arc<ServerResources>>,
    ) -> Result<Response, AppError> {
        let results = resources.recipes.fetch_list().await?;
        info!(count = results.len(), "Recipe list served");

        Ok((StatusCode::OK, Json(RecipeListResponse { results })).into_response())
    }

    /// Handle the aggregated recipe detail
    async fn handle_detail(
        State(resources): State<Arc<ServerResources>>,
        id: Result<Path<String>, PathRejection>,
    ) -> Result<Response, AppError> {
        // An undecodable path segment is a malformed id, not a routing error
        let Path(id) = id.map_err(|_| AppError::invalid_input(messages::INVALID_RECIPE_ID))?;
        let detail = resources.aggregator.aggregate(&id).await?;

        Ok((StatusCode::OK, Json(detail)).into_response())
    }

    /// A detail request without an id is malformed input
    async fn handle_missing_id() -> AppError {
        AppError::invalid_input(messages::INVALID_RECIPE_ID)
    }
}
