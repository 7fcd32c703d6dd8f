// ABOUTME: Recipe domain services built on top of the provider clients
// ABOUTME: Hosts the aggregator that joins recipe metadata with per-ingredient nutrition

//! Recipe services

/// Recipe detail aggregation with nutrition fan-out
pub mod aggregator;

pub use aggregator::RecipeAggregator;
