// ABOUTME: HTTP server assembly: router, middleware stack, bind, and graceful shutdown
// ABOUTME: Merges the recipe, audit, and health route groups over shared ServerResources
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Recipe Proxy Server
//!
//! Layer order (outermost first): CORS, request-id assignment, tracing,
//! request-id propagation onto the response.

use crate::middleware::{make_request_span, setup_cors, REQUEST_ID_HEADER};
use crate::resources::ServerResources;
use crate::routes::{AuditRoutes, HealthRoutes, RecipeRoutes};
use anyhow::{Context, Result};
use axum::Router;
use http::HeaderName;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

/// Build the full application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    let request_id = HeaderName::from_static(REQUEST_ID_HEADER);
    let cors = setup_cors(&resources.config);

    Router::new()
        .merge(HealthRoutes::routes())
        .merge(RecipeRoutes::routes(Arc::clone(&resources)))
        .merge(AuditRoutes::routes(resources))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(request_id.clone(), MakeRequestUuid))
                .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
                .layer(PropagateRequestIdLayer::new(request_id)),
        )
        .layer(cors)
}

/// Bind the configured address and serve until a shutdown signal arrives
///
/// # Errors
///
/// Returns an error if the address cannot be bound or the server fails
pub async fn run(resources: Arc<ServerResources>) -> Result<()> {
    let address = resources.config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {address}"))?;

    match listener.local_addr() {
        Ok(local) => info!("Recipe proxy listening on {local}"),
        Err(e) => warn!("Could not determine local address: {e}"),
    }

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Completes on Ctrl+C, or SIGTERM on Unix
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, initiating graceful shutdown"),
        () = terminate => info!("Received SIGTERM, initiating graceful shutdown"),
    }
}
