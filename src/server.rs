//! HTTP server initialization and runtime setup.
//!
//! Builds the upstream client, gateways and services, then runs the Axum
//! server until SIGINT/SIGTERM.

use crate::application::services::{RedirectService, ShortenService};
use crate::config::Config;
use crate::domain::gateways::{RedirectGateway, ShortenerGateway};
use crate::domain::path_rules::PathRules;
use crate::infrastructure::upstream::{
    HttpRedirectGateway, HttpShortenerGateway, build_http_client,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Assembles application state from configuration.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn build_state(config: &Config) -> Result<AppState> {
    let client = build_http_client().context("Failed to build HTTP client")?;

    let redirect_gateway: Arc<dyn RedirectGateway> = Arc::new(HttpRedirectGateway::new(
        client.clone(),
        &config.redirect_api_url,
    ));
    let shortener_gateway: Arc<dyn ShortenerGateway> = Arc::new(HttpShortenerGateway::new(
        client,
        config.shorten_api_url.clone(),
    ));

    let rules = PathRules::with_extra_prefixes(&config.reserved_prefixes);

    Ok(AppState::new(
        RedirectService::new(rules, redirect_gateway),
        ShortenService::new(shortener_gateway),
        config.public_origin.clone(),
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let state = build_state(&config)?;
    tracing::info!(
        "Filter ready with {} skip rules",
        state.redirect_service.rules().matchers().len()
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!("Failed to listen for SIGTERM: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
