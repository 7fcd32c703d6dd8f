// ABOUTME: Centralized resource container for dependency injection into the route handlers
// ABOUTME: Owns the configuration and the provider clients shared across requests
//
// Licensed under either of Apache License, Version 2.0 or MIT License at your option.
// Copyright ©2025 Async-IO.org

//! # Server Resources
//!
//! Built once at startup from the immutable [`ServerConfig`] and handed to
//! every route group behind an `Arc`. Tests build it with
//! [`ServerResources::with_clients`] to inject fake providers.

use crate::config::ServerConfig;
use crate::external::{
    AuditStore, EdamamClient, NutritionLookup, RecipeProvider, SpoonacularClient, SupabaseClient,
};
use crate::recipes::RecipeAggregator;
use std::sync::Arc;

/// Shared server resources
#[derive(Clone)]
pub struct ServerResources {
    /// Immutable process configuration
    pub config: Arc<ServerConfig>,
    /// Recipe provider used by the list route and the aggregator
    pub recipes: Arc<dyn RecipeProvider>,
    /// Audit row writer
    pub audit: Arc<dyn AuditStore>,
    /// Recipe detail aggregator
    pub aggregator: RecipeAggregator,
}

impl ServerResources {
    /// Build the production HTTP clients from configuration
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        let timeout = config.upstream_timeout();
        let services = &config.external_services;

        let recipes = Arc::new(SpoonacularClient::new(services.spoonacular.clone(), timeout));
        let nutrition = Arc::new(EdamamClient::new(services.edamam.clone(), timeout));
        let audit = Arc::new(SupabaseClient::new(services.supabase.clone(), timeout));

        Self::with_clients(config, recipes, nutrition, audit)
    }

    /// Assemble resources around already-built providers
    #[must_use]
    pub fn with_clients(
        config: Arc<ServerConfig>,
        recipes: Arc<dyn RecipeProvider>,
        nutrition: Arc<dyn NutritionLookup>,
        audit: Arc<dyn AuditStore>,
    ) -> Self {
        let aggregator = RecipeAggregator::new(Arc::clone(&recipes), nutrition);
        Self {
            config,
            recipes,
            audit,
            aggregator,
        }
    }
}
