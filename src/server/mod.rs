pub mod handlers;

use crate::domain::ports::{ConfigProvider, ScoringModel};
use crate::utils::error::{PredictError, Result};
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<dyn ScoringModel>,
}

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health))
        .route("/predict", post(handlers::predict))
        .with_state(state)
}

/// Bind the listener and serve until ctrl-c. The model handle is read-only
/// from here on; every request shares it through the router state.
pub async fn run(config: &dyn ConfigProvider, model: Arc<dyn ScoringModel>) -> Result<()> {
    let bind_addr: SocketAddr = config.bind_address().parse().map_err(|e| {
        PredictError::InvalidConfigValueError {
            field: "bind_address".to_string(),
            value: config.bind_address().to_string(),
            reason: format!("{}", e),
        }
    })?;

    let router = create_router(AppState { model });

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    tracing::info!("🍷 Wine quality service listening on http://{}", bind_addr);

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => tracing::error!("Failed to listen for shutdown signal: {}", e),
    }
}
