// ABOUTME: Recipe proxy HTTP server binary
// ABOUTME: Loads configuration, initializes logging, and serves the recipe API until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Proxy Server Binary
//!
//! Serves `/api/recipes`, `/api/recipe/:id`, and `/api/supabase`.

use anyhow::Result;
use clap::Parser;
use recipe_proxy::{config::ServerConfig, logging, resources::ServerResources, server};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "recipe-proxy-server")]
#[command(about = "Recipe proxy - recipes with per-ingredient nutrition")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    port: Option<u16>,

    /// Override bind address
    #[arg(long)]
    host: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(port) = args.port {
        config.http_port = port;
    }
    if let Some(host) = args.host {
        config.host = host;
    }

    logging::init_from_env()?;

    info!("Starting recipe proxy");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(Arc::new(config)));

    if let Err(e) = server::run(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }

    Ok(())
}
