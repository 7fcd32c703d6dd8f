// ABOUTME: Configuration module for server settings and provider credentials
// ABOUTME: Environment-only configuration loaded once into an immutable ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! - **Environment**: server settings read from environment variables
//! - **API providers**: endpoints and credentials of the external services

/// External provider endpoints and credentials
pub mod api_providers;
/// Environment and server configuration
pub mod environment;

pub use api_providers::{
    EdamamApiConfig, ExternalServicesConfig, IpLookupConfig, SpoonacularApiConfig, SupabaseConfig,
};
pub use environment::{Environment, LogLevel, ServerConfig};
