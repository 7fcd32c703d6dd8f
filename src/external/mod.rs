// ABOUTME: External API client modules (Spoonacular, Edamam, Supabase, IP discovery)
// ABOUTME: Defines the provider traits the aggregator and routes depend on
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! External API Clients
//!
//! Every client returns a [`LookupResult`]; none of them panics or lets a
//! transport error escape. The traits below are the seams the aggregator
//! and the routes depend on, so tests can inject fakes.

/// Edamam nutrition lookup
pub mod edamam_client;
/// Public IP discovery
pub mod ip_lookup;
/// Response helpers shared by the clients
pub mod responses;
/// Spoonacular recipe provider
pub mod spoonacular_client;
/// Supabase audit store
pub mod supabase_client;

use async_trait::async_trait;
use recipe_core::errors::LookupResult;
use recipe_core::models::RecipeSummary;

pub use edamam_client::{EdamamClient, NutritionFacts};
pub use ip_lookup::IpLookupClient;
pub use spoonacular_client::{RecipeInformation, SpoonacularClient};
pub use supabase_client::{AuditEntry, SupabaseClient};

/// Resolves a free-text ingredient description to a calorie count
#[async_trait]
pub trait NutritionLookup: Send + Sync {
    /// Look up nutrition for one ingredient description
    async fn lookup(&self, description: &str) -> LookupResult<NutritionFacts>;
}

/// Resolves recipe metadata from the recipe provider
#[async_trait]
pub trait RecipeProvider: Send + Sync {
    /// Fetch the default list page of recipes
    async fn fetch_list(&self) -> LookupResult<Vec<RecipeSummary>>;

    /// Fetch one recipe with its ingredient list
    async fn fetch_by_id(&self, id: &str) -> LookupResult<RecipeInformation>;
}

/// Insert-only audit log
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Write one audit row, returning the stored representation
    async fn record(&self, entry: &AuditEntry) -> LookupResult<serde_json::Value>;
}
