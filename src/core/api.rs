//! Minimal client for the Spatial Data API root endpoint.

use gloo_net::http::Request;
use serde::Deserialize;

/// Payload of `GET /` on the API root.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiStatus {
    pub message: String,
}

/// Fetch the API root status message.
///
/// Errors are reduced to user-facing strings; callers render them directly.
pub async fn fetch_status(base: &str) -> Result<ApiStatus, String> {
    let url = if base.is_empty() {
        "/".to_string()
    } else {
        format!("{base}/")
    };

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|_| "Network error. Is the API running?".to_string())?;

    if !response.ok() {
        return Err(format!("API answered with status {}", response.status()));
    }

    response
        .json::<ApiStatus>()
        .await
        .map_err(|_| "API returned an unexpected payload".to_string())
}
