// ABOUTME: Data models for recipes, ingredients, and nutrition results
// ABOUTME: Request-scoped types built from provider payloads and serialized to clients

//! Core data models
//!
//! All of these are request-scoped: built from a provider response, used
//! to produce one HTTP response, then dropped.

/// Recipe list, detail, and ingredient types
pub mod recipe;

pub use recipe::{IngredientNutrition, IngredientRef, RecipeDetail, RecipeSummary};
