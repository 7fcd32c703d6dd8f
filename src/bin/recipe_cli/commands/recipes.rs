// ABOUTME: Recipe list and detail commands for recipe-cli
// ABOUTME: Mirrors the browser pages: list view, and detail view with optional audit write
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::helpers::api::ProxyApi;
use crate::helpers::display::{display_recipe_detail, display_recipe_list};
use anyhow::{anyhow, bail, Result};
use recipe_proxy::config::ServerConfig;
use recipe_proxy::external::IpLookupClient;
use serde_json::json;
use tracing::debug;

/// `recipe-cli list`
pub async fn list(api: &ProxyApi) -> Result<()> {
    let recipes = api.list_recipes().await?;
    display_recipe_list(&recipes);
    Ok(())
}

/// `recipe-cli show <id> [--audit]`
///
/// The IP is resolved before the recipe is fetched; without it the audit
/// write cannot happen, so that failure stops the command.
pub async fn show(api: &ProxyApi, id: &str, audit: bool) -> Result<()> {
    if id.trim().is_empty() || id.trim().parse::<u64>().is_err() {
        bail!("Invalid recipe ID");
    }

    let user_ip = if audit {
        let config = ServerConfig::from_env()?;
        let client = IpLookupClient::new(
            config.external_services.ip_lookup.clone(),
            config.upstream_timeout(),
        );
        let ip = client
            .lookup()
            .await
            .ok_or_else(|| anyhow!("Failed to retrieve user IP."))?;
        Some(ip)
    } else {
        None
    };

    let recipe = api.get_recipe(id.trim()).await?;

    if let Some(user_ip) = user_ip {
        let data = json!({
            "recipeId": id.trim(),
            "recipe": recipe,
        });
        api.record_audit(&user_ip, &data).await?;
        debug!("Audit row written for {user_ip}");
    }

    display_recipe_detail(&recipe);
    Ok(())
}
