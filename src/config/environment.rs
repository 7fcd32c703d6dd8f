// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Loads the immutable ServerConfig once at startup from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management
//!
//! The configuration is read once, at process start, and then handed to the
//! provider clients explicitly. Nothing below the binaries reads the
//! environment on its own.

use super::api_providers::ExternalServicesConfig;
use anyhow::{Context, Result};
use recipe_core::constants::defaults;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::{info, warn};

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Normal operation
    #[default]
    Info,
    /// Verbose
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated tests
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// `*` or a comma-separated origin list
    pub allowed_origins: String,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: "*".to_owned(),
        }
    }
}

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Bind address
    pub host: String,
    /// Log level
    pub log_level: LogLevel,
    /// Deployment environment
    pub environment: Environment,
    /// Timeout applied to every outbound provider call, in milliseconds
    pub upstream_timeout_ms: u64,
    /// CORS settings
    pub cors: CorsConfig,
    /// Provider endpoints and credentials
    pub external_services: ExternalServicesConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::SERVER_PORT,
            host: defaults::SERVER_HOST.to_owned(),
            log_level: LogLevel::default(),
            environment: Environment::default(),
            upstream_timeout_ms: defaults::UPSTREAM_TIMEOUT_MS,
            cors: CorsConfig::default(),
            external_services: ExternalServicesConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// A `.env` file in the working directory is honoured when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {e}");
        }

        let config = Self {
            http_port: env_var_or("SERVER_PORT", &defaults::SERVER_PORT.to_string())
                .parse()
                .context("Invalid SERVER_PORT value")?,
            host: env_var_or("SERVER_HOST", defaults::SERVER_HOST),
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")),
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            upstream_timeout_ms: env_var_or(
                "UPSTREAM_TIMEOUT_MS",
                &defaults::UPSTREAM_TIMEOUT_MS.to_string(),
            )
            .parse()
            .context("Invalid UPSTREAM_TIMEOUT_MS value")?,
            cors: CorsConfig {
                allowed_origins: env_var_or("CORS_ALLOWED_ORIGINS", "*"),
            },
            external_services: ExternalServicesConfig::from_env(),
        };

        if config.upstream_timeout_ms == 0 {
            anyhow::bail!("UPSTREAM_TIMEOUT_MS must be greater than zero");
        }

        Ok(config)
    }

    /// Outbound call timeout as a `Duration`
    #[must_use]
    pub const fn upstream_timeout(&self) -> Duration {
        Duration::from_millis(self.upstream_timeout_ms)
    }

    /// Socket address string to bind
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.http_port)
    }

    /// Redacted multi-line description for the startup log
    #[must_use]
    pub fn summary(&self) -> String {
        let services = &self.external_services;
        format!(
            "Recipe Proxy Configuration:\n\
             - HTTP Address: {}\n\
             - Environment: {}\n\
             - Log Level: {}\n\
             - Upstream Timeout: {}ms\n\
             - Spoonacular: {}\n\
             - Edamam: {}\n\
             - Supabase: {} (table {})\n\
             - CORS Origins: {}",
            self.bind_address(),
            self.environment,
            self.log_level,
            self.upstream_timeout_ms,
            configured(services.spoonacular.is_configured()),
            configured(services.edamam.is_configured()),
            configured(services.supabase.is_configured()),
            services.supabase.table,
            self.cors.allowed_origins,
        )
    }
}

const fn configured(present: bool) -> &'static str {
    if present {
        "Configured"
    } else {
        "Missing credentials"
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
