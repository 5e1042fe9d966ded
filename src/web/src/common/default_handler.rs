use crate::ApiError;
use axum::http::Uri;
use axum::response::IntoResponse;

/// Answers every unrouted path with a JSON 404.
pub async fn default_handler(uri: Uri) -> impl IntoResponse {
    ApiError::NotFound(format!("No route for {}", uri.path()))
}
