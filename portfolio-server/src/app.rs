//! Router assembly shared by `main` and the integration tests

use axum::http::{header, HeaderValue, Method};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api::{self, ApiState};
use crate::config::Config;

/// API routes first, then files from the public root, then the frontend build.
pub fn build_app(config: &Config) -> Router {
    let router = api::router().with_state(ApiState::new(config.public_dir.clone()));

    let router = match &config.frontend_dist {
        Some(dist) => {
            tracing::info!(path = %dist.display(), "Serving frontend assets");
            router.fallback_service(
                ServeDir::new(&config.public_dir).fallback(ServeDir::new(dist)),
            )
        }
        None => router.fallback_service(ServeDir::new(&config.public_dir)),
    };

    router
        .layer(cors_layer(&config.cors_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed_origins = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect::<Vec<_>>();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed_origins))
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(std::time::Duration::from_secs(3600))
}
