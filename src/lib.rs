// ABOUTME: Main library entry point for the recipe proxy service
// ABOUTME: Proxies a recipe provider and aggregates per-ingredient nutrition into recipe details
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Recipe Proxy
//!
//! A thin HTTP backend in front of Spoonacular (recipes) and Edamam
//! (nutrition), with an optional Supabase audit log.
//!
//! ## Architecture
//!
//! - **External**: provider clients; every call returns a `LookupResult`
//! - **Recipes**: the aggregator fanning out one nutrition lookup per ingredient
//! - **Routes**: `/api/recipes`, `/api/recipe/:id`, `/api/supabase`, health
//! - **Config**: environment-only `ServerConfig`, loaded once at start
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use recipe_proxy::config::ServerConfig;
//! use recipe_proxy::resources::ServerResources;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Arc::new(ServerConfig::from_env()?);
//!     let resources = Arc::new(ServerResources::new(config));
//!     recipe_proxy::server::run(resources).await
//! }
//! ```

/// Environment configuration
pub mod config;

/// Outbound provider clients and their traits
pub mod external;

/// Structured logging setup
pub mod logging;

/// HTTP middleware (CORS, request ids)
pub mod middleware;

/// Recipe aggregation
pub mod recipes;

/// Shared resources handed to the routes
pub mod resources;

/// HTTP route groups
pub mod routes;

/// Router assembly and serving
pub mod server;

/// Data models, re-exported from `recipe-core`
pub use recipe_core::models;

/// Error types, re-exported from `recipe-core`
pub use recipe_core::errors;

/// Shared constants, re-exported from `recipe-core`
pub use recipe_core::constants;
