//! HTTP layer exposing the proxy API and static dashboard.

pub mod routes;
pub mod types;

use std::net::SocketAddr;

use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::info;

use crate::{config::Settings, data::openfda::OpenFdaClient};

#[derive(Clone)]
pub struct AppState {
    pub openfda: OpenFdaClient,
}

/// Build the application router; split out so tests can drive it directly.
pub fn router(settings: &Settings) -> Result<Router> {
    let state = AppState {
        openfda: OpenFdaClient::new(settings)?,
    };
    let static_dir = ServeDir::new(&settings.ui_dir);
    Ok(Router::new()
        .route("/api/adverse-events", get(routes::adverse_events))
        .route(
            "/api/adverse-events/summary",
            get(routes::adverse_event_summary),
        )
        .fallback_service(static_dir)
        .layer(TraceLayer::new_for_http())
        .with_state(state))
}

pub async fn serve(settings: Settings, host: String, port: u16) -> Result<()> {
    let router = router(&settings)?;
    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving ae-pulse dashboard");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
