// ABOUTME: Builds a RecipeDetail from one recipe fetch plus N concurrent nutrition lookups
// ABOUTME: Base-recipe failure is fatal; each failed ingredient lookup contributes zero calories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Aggregation
//!
//! `aggregate(id)` fetches the recipe, then resolves every ingredient's
//! calories concurrently. All lookups are awaited together; results are
//! associated with their ingredient by position, so the response keeps the
//! provider's ingredient order whatever order the lookups finish in.
//!
//! Each lookup carries its own timeout inside the nutrition client, so one
//! slow ingredient never cancels its siblings.

use crate::external::{NutritionLookup, RecipeProvider};
use futures_util::future::join_all;
use recipe_core::errors::LookupResult;
use recipe_core::models::RecipeDetail;
use std::sync::Arc;
use tracing::{debug, info};

/// Joins a recipe provider with a nutrition provider
#[derive(Clone)]
pub struct RecipeAggregator {
    recipes: Arc<dyn RecipeProvider>,
    nutrition: Arc<dyn NutritionLookup>,
}

impl RecipeAggregator {
    /// Create an aggregator over the given providers
    #[must_use]
    pub fn new(recipes: Arc<dyn RecipeProvider>, nutrition: Arc<dyn NutritionLookup>) -> Self {
        Self { recipes, nutrition }
    }

    /// Build the recipe detail for `id`
    ///
    /// # Errors
    ///
    /// Returns the recipe provider's error unchanged when the base recipe
    /// cannot be fetched. Nutrition failures never surface here.
    pub async fn aggregate(&self, id: &str) -> LookupResult<RecipeDetail> {
        let recipe = self.recipes.fetch_by_id(id).await?;
        let ingredient_count = recipe.extended_ingredients.len();

        let lookups = recipe.extended_ingredients.iter().map(|ingredient| {
            let description = ingredient.description();
            let nutrition = Arc::clone(&self.nutrition);
            async move { nutrition.lookup(&description).await }
        });
        let results = join_all(lookups).await;

        let mut unresolved = 0;
        let ingredients = recipe
            .extended_ingredients
            .into_iter()
            .zip(results)
            .map(|(ingredient, result)| {
                let calories = result.map_or_else(
                    |e| {
                        debug!(ingredient = %ingredient.name, "Using 0 calories: {e}");
                        unresolved += 1;
                        0.0
                    },
                    |facts| facts.calories,
                );
                ingredient.with_calories(calories)
            })
            .collect();

        let detail = RecipeDetail::new(
            recipe.title,
            recipe.image,
            recipe.summary,
            ingredients,
            unresolved,
        );

        info!(
            recipe_id = %id.trim(),
            ingredients = ingredient_count,
            unresolved = detail.unresolved_ingredients,
            total_calories = detail.total_calories,
            "Recipe aggregated"
        );

        Ok(detail)
    }
}
