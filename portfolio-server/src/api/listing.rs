//! Listing handlers over the public content folders

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use shared_types::{BackgroundResponse, ShortcutsResponse};

use crate::api::ApiState;
use crate::content;

const SHORTCUTS_FAILED: &str = "Failed to load shortcuts";

/// GET /api/projects
pub async fn get_projects(State(state): State<ApiState>) -> impl IntoResponse {
    Json(content::scan_projects(&state.public_dir).await)
}

/// GET /api/shortcuts
///
/// The only listing that reports failure: an unreadable `shortcuts/` folder
/// answers 500 with an empty list so the desktop still renders.
pub async fn get_shortcuts(State(state): State<ApiState>) -> impl IntoResponse {
    match content::scan_shortcuts(&state.public_dir).await {
        Ok(shortcuts) => (
            StatusCode::OK,
            Json(ShortcutsResponse {
                shortcuts,
                error: None,
            }),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to load shortcuts");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ShortcutsResponse {
                    shortcuts: Vec::new(),
                    error: Some(SHORTCUTS_FAILED.to_string()),
                }),
            )
        }
    }
}

/// GET /api/background
pub async fn get_background(State(state): State<ApiState>) -> impl IntoResponse {
    Json(BackgroundResponse {
        media: content::find_background(&state.public_dir).await,
    })
}
