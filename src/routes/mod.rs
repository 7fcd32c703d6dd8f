// ABOUTME: Route module organization for the recipe proxy HTTP endpoints
// ABOUTME: Groups recipe, audit, and health routes, each exposing a routes() constructor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module
//!
//! Each domain module contains only route definitions and thin handlers
//! that delegate to the aggregator or a provider client.

/// Audit row route
pub mod audit;
/// Health check routes
pub mod health;
/// Recipe list and detail routes
pub mod recipes;

pub use audit::AuditRoutes;
pub use health::HealthRoutes;
pub use recipes::RecipeRoutes;
