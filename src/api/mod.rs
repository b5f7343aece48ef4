// src/api/mod.rs — HTTP server

pub mod auth;
pub mod handlers;
pub mod types;

use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::core::planner::Planner;
use crate::infra::config::{Config, ProfileConfig};
use crate::infra::errors::DaybreakError;

/// Shared state for all API handlers.
#[derive(Clone)]
pub struct ApiState {
    pub planner: Arc<Planner>,
    pub profile: ProfileConfig,
    pub confidence_threshold: f64,
    pub token: Option<String>,
}

pub fn build_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/config", get(handlers::get_config))
        .route("/api/v1/plan", get(handlers::run_plan))
        .route("/api/v1/approve", post(handlers::approve_plan))
        .route(
            "/api/v1/preferences",
            get(handlers::get_preferences).post(handlers::save_preferences),
        )
        .route("/api/v1/history", get(handlers::get_history))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve until the process is stopped.
pub async fn start_server(config: &Config, port: u16) -> Result<(), DaybreakError> {
    let planner = Planner::from_config(config)?;
    let state = ApiState {
        planner: Arc::new(planner),
        profile: config.profile.clone(),
        confidence_threshold: config.risk.confidence_threshold,
        token: config.server.token.clone(),
    };

    let app = build_router(state);
    let addr = format!("127.0.0.1:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("API server listening on http://{}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
