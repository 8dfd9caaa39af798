use gloo_net::http::{Method, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use shared_types::{
    BackgroundMedia, BackgroundResponse, ProjectsResponse, Shortcut, ShortcutsResponse,
    API_BACKGROUND, API_PROJECTS, API_SHORTCUTS,
};
use std::sync::OnceLock;
use web_sys::RequestCache;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8080
/// - In production: same origin, the server hosts the UI
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8080".to_string()
    } else {
        String::new()
    }
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

fn url_for(path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        path.to_string()
    } else {
        format!("{}{}", api_base(), path)
    }
}

fn uncached(method: Method, path: &str) -> RequestBuilder {
    RequestBuilder::new(&url_for(path))
        .method(method)
        .cache(RequestCache::NoStore)
}

async fn send(request: RequestBuilder) -> Result<gloo_net::http::Response, String> {
    let response = request
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(response)
}

/// GET a JSON document, bypassing the HTTP cache.
pub async fn fetch_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    send(uncached(Method::GET, path))
        .await?
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))
}

pub async fn fetch_text(path: &str) -> Result<String, String> {
    send(uncached(Method::GET, path))
        .await?
        .text()
        .await
        .map_err(|e| format!("Failed to read body: {e}"))
}

/// HEAD request; any failure counts as "does not exist".
pub async fn resource_exists(path: &str) -> bool {
    send(uncached(Method::HEAD, path)).await.is_ok()
}

pub async fn fetch_projects() -> Result<ProjectsResponse, String> {
    fetch_json(API_PROJECTS).await
}

pub async fn fetch_shortcuts() -> Result<Vec<Shortcut>, String> {
    let url = url_for(API_SHORTCUTS);
    let response = Request::get(&url)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    // The 500 body still has the `shortcuts`/`error` shape.
    let data: ShortcutsResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse JSON: {e}"))?;

    match data.error {
        Some(error) => Err(format!("HTTP error: {} ({error})", response.status())),
        None => Ok(data.shortcuts),
    }
}

pub async fn fetch_background() -> Result<Option<BackgroundMedia>, String> {
    let data: BackgroundResponse = fetch_json(API_BACKGROUND).await?;
    Ok(data.media)
}
