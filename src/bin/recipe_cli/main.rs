// ABOUTME: Recipe CLI - terminal front end for a running recipe proxy
// ABOUTME: Lists recipes and renders a recipe's ingredient calories, optionally writing an audit row
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # List the default page of recipes
//! recipe-cli list
//!
//! # Show one recipe with per-ingredient calories
//! recipe-cli show 716429
//!
//! # Same, recording the request in the audit store first
//! recipe-cli show 716429 --audit
//!
//! # Talk to a server on another host
//! recipe-cli --server http://10.0.0.5:4000 list
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use helpers::api::ProxyApi;

#[derive(Parser)]
#[command(
    name = "recipe-cli",
    about = "Recipe proxy CLI",
    long_about = "Terminal front end for the recipe proxy: lists recipes and shows per-ingredient nutrition."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Base URL of the recipe proxy
    #[arg(long, global = true, default_value = "http://localhost:4000")]
    server: String,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// List recipes
    List,

    /// Show one recipe with its nutrition
    Show {
        /// Numeric recipe id
        id: String,

        /// Resolve the public IP and write an audit row before rendering
        #[arg(long)]
        audit: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(std::io::stderr)
        .init();

    let api = ProxyApi::new(&cli.server);
    let result = match cli.command {
        Command::List => commands::recipes::list(&api).await,
        Command::Show { id, audit } => commands::recipes::show(&api, &id, audit).await,
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
