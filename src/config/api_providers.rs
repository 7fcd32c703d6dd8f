// ABOUTME: External API provider configuration for recipe, nutrition, audit, and IP services
// ABOUTME: Reads Spoonacular, Edamam, Supabase, and IP lookup settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use recipe_core::constants::defaults;
use serde::{Deserialize, Serialize};
use std::env;

/// External API services configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExternalServicesConfig {
    /// Recipe provider configuration
    pub spoonacular: SpoonacularApiConfig,
    /// Nutrition provider configuration
    pub edamam: EdamamApiConfig,
    /// Audit store configuration
    pub supabase: SupabaseConfig,
    /// Public IP discovery configuration
    pub ip_lookup: IpLookupConfig,
}

impl ExternalServicesConfig {
    /// Load external services configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            spoonacular: SpoonacularApiConfig::from_env(),
            edamam: EdamamApiConfig::from_env(),
            supabase: SupabaseConfig::from_env(),
            ip_lookup: IpLookupConfig::from_env(),
        }
    }
}

/// Spoonacular recipe API configuration
///
/// Credentials stay optional here; the client checks them per call so a
/// missing key fails one endpoint instead of the whole process.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SpoonacularApiConfig {
    /// Recipe list endpoint, queried with `number` and `offset`
    pub list_url: Option<String>,
    /// Base URL for `/{id}/information`
    pub recipes_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
}

impl SpoonacularApiConfig {
    /// Load Spoonacular API configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            list_url: env_non_empty_or("SPOONACULAR_URL", defaults::SPOONACULAR_URL),
            recipes_url: env_non_empty_or(
                "SPOONACULAR_RECIPES_URL",
                defaults::SPOONACULAR_RECIPES_URL,
            ),
            api_key: env_non_empty("SPOONACULAR_KEY"),
        }
    }

    /// Whether both the list URL and the key are present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.list_url.is_some() && self.api_key.is_some()
    }
}

/// Edamam nutrition API configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EdamamApiConfig {
    /// Nutrition data endpoint
    pub base_url: String,
    /// Application id
    pub app_id: Option<String>,
    /// Application key
    pub app_key: Option<String>,
}

impl EdamamApiConfig {
    /// Load Edamam API configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: env_var_or("EDAMAM_APP_URL", defaults::EDAMAM_URL),
            app_id: env_non_empty("EDAMAM_APP_ID"),
            app_key: env_non_empty("EDAMAM_APP_KEY"),
        }
    }

    /// Whether both credentials are present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.app_id.is_some() && self.app_key.is_some()
    }
}

/// Supabase audit store configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SupabaseConfig {
    /// Project URL (PostgREST lives under `/rest/v1`)
    pub url: Option<String>,
    /// Anonymous API key
    pub anon_key: Option<String>,
    /// Audit table name
    pub table: String,
}

impl SupabaseConfig {
    /// Load Supabase configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            url: env_non_empty("SUPABASE_URL"),
            anon_key: env_non_empty("SUPABASE_ANON_KEY"),
            table: env_var_or("SUPABASE_TABLE", defaults::SUPABASE_TABLE),
        }
    }

    /// Whether URL and key are present
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }
}

/// Public IP discovery configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IpLookupConfig {
    /// Endpoint returning `{"ip": "..."}`
    pub url: String,
}

impl Default for IpLookupConfig {
    fn default() -> Self {
        Self {
            url: defaults::IP_LOOKUP_URL.to_owned(),
        }
    }
}

impl IpLookupConfig {
    /// Load IP lookup configuration from environment
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            url: env_var_or("IP_LOOKUP_URL", defaults::IP_LOOKUP_URL),
        }
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Get a non-blank environment variable
fn env_non_empty(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

/// Non-blank environment variable, the default when unset, `None` when set blank
fn env_non_empty_or(key: &str, default: &str) -> Option<String> {
    match env::var(key) {
        Ok(value) => Some(value.trim().to_owned()).filter(|value| !value.is_empty()),
        Err(_) => Some(default.to_owned()),
    }
}
