//! HTTP server initialization and runtime setup.
//!
//! Wires the commerce client, the processing service, and the Axum server.

use crate::application::services::{ReturnPolicy, ReturnProcessingService};
use crate::config::Config;
use crate::infrastructure::commerce::{
    CommerceClient, HttpOrderClient, HttpReturnClient, HttpShipmentClient,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - The shared commerce API client (one per process, reused across invocations)
/// - The return processing service with its configured policy
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if the commerce client cannot be built, the listen
/// address is invalid, or the server fails at runtime.
pub async fn run(config: Config) -> Result<()> {
    let commerce = Arc::new(
        CommerceClient::new(
            &config.api_base_url,
            &config.api_client_id,
            &config.api_client_secret,
            Duration::from_secs(config.http_timeout_seconds),
        )
        .context("Failed to build commerce API client")?,
    );
    tracing::info!("Commerce API client ready for {}", config.api_base_url);

    let shipments = Arc::new(HttpShipmentClient::new(commerce.clone()));
    let orders = Arc::new(HttpOrderClient::new(commerce.clone()));
    let returns = Arc::new(HttpReturnClient::new(commerce));

    let processor = Arc::new(ReturnProcessingService::new(
        shipments,
        orders,
        returns,
        ReturnPolicy {
            return_reason: config.return_reason.clone(),
            location_code: config.default_return_location_code.clone(),
            use_site_header: config.site_header_override,
        },
    ));

    let state = AppState::new(processor);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service(app),
    )
    .await?;

    Ok(())
}
