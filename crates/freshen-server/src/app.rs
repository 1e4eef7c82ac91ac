use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::post;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use freshen_core::{AppConfig, UpdateService};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
}

/// Build the axum application router
pub fn build_app(config: Arc<AppConfig>) -> Router {
    let state = AppState { config };

    Router::new()
        .route("/ready", post(trigger_update))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start an update run in the background and acknowledge immediately
///
/// The spawned run keeps no handle; its progress is visible only in logs.
async fn trigger_update(State(state): State<AppState>) -> (StatusCode, String) {
    match UpdateService::from_config(&state.config) {
        Ok(service) => {
            tokio::spawn(service.run());
            info!("Update run started");
            (StatusCode::ACCEPTED, String::new())
        }
        Err(e) => {
            error!("Unable to start update run: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Unable to start update process: {}", e),
            )
        }
    }
}
