//! HTTP API routes for the portfolio desktop
//!
//! Every listing endpoint is read-only and derived from the public root on
//! each request, so dropping a file into `public/` shows up on reload.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use std::path::PathBuf;
use std::sync::Arc;

pub mod listing;

#[derive(Clone)]
pub struct ApiState {
    pub public_dir: Arc<PathBuf>,
}

impl ApiState {
    pub fn new(public_dir: impl Into<PathBuf>) -> Self {
        Self {
            public_dir: Arc::new(public_dir.into()),
        }
    }
}

/// Configure all API routes
pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health_check))
        .route(shared_types::API_PROJECTS, get(listing::get_projects))
        .route(shared_types::API_SHORTCUTS, get(listing::get_shortcuts))
        .route(shared_types::API_BACKGROUND, get(listing::get_background))
}

/// Health check endpoint
pub async fn health_check(State(_state): State<ApiState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "portfolio-server",
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}
