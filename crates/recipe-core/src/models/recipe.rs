// ABOUTME: Recipe and ingredient models shared by the aggregator, routes, and CLI
// ABOUTME: IngredientRef, IngredientNutrition, RecipeDetail, and RecipeSummary definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// Ingredient as supplied by the recipe provider
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRef {
    /// Ingredient name (e.g., "black beans")
    pub name: String,
    /// Quantity in `unit`
    #[serde(default)]
    pub amount: f64,
    /// Unit of measure, possibly empty
    #[serde(default)]
    pub unit: String,
}

impl IngredientRef {
    /// Free-text description sent to the nutrition provider: `"{amount} {unit} {name}"`
    #[must_use]
    pub fn description(&self) -> String {
        format!("{} {} {}", self.amount, self.unit, self.name)
    }

    /// Attach a calorie value, producing the response row
    #[must_use]
    pub fn with_calories(self, calories: f64) -> IngredientNutrition {
        IngredientNutrition {
            name: self.name,
            amount: self.amount,
            unit: self.unit,
            calories,
        }
    }
}

/// Ingredient extended with its resolved calories
///
/// `calories` is the provider's value, or exactly `0.0` when the lookup failed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientNutrition {
    /// Ingredient name
    pub name: String,
    /// Quantity in `unit`
    pub amount: f64,
    /// Unit of measure
    pub unit: String,
    /// Resolved kilocalories
    pub calories: f64,
}

/// Recipe with per-ingredient nutrition and a calorie total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetail {
    /// Recipe title
    pub title: String,
    /// Image URL
    pub image: String,
    /// Provider summary (may contain HTML)
    pub description: String,
    /// One entry per provider ingredient, in provider order
    pub ingredients: Vec<IngredientNutrition>,
    /// Sum of `ingredients[].calories`
    pub total_calories: f64,
    /// How many ingredients fell back to zero because their lookup failed
    #[serde(default)]
    pub unresolved_ingredients: usize,
}

impl RecipeDetail {
    /// Build a detail, computing the total from the ingredient rows
    #[must_use]
    pub fn new(
        title: String,
        image: String,
        description: String,
        ingredients: Vec<IngredientNutrition>,
        unresolved_ingredients: usize,
    ) -> Self {
        let total_calories = ingredients.iter().map(|i| i.calories).sum();
        Self {
            title,
            image,
            description,
            ingredients,
            total_calories,
            unresolved_ingredients,
        }
    }
}

/// List-view projection of a recipe
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSummary {
    /// Provider recipe id
    pub id: u64,
    /// Recipe title
    pub title: String,
    /// Thumbnail URL
    #[serde(default)]
    pub image: String,
}
