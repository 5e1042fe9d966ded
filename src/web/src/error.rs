use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use league_core::{LeagueError, StoreError};
use log::error;
use serde_json::json;

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    InternalError(String),
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InternalError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<LeagueError> for ApiError {
    fn from(err: LeagueError) -> Self {
        match err {
            LeagueError::NotFound { .. } => ApiError::NotFound(err.to_string()),
            LeagueError::InsufficientTeams { .. } | LeagueError::InvalidInput(_) => {
                ApiError::BadRequest(err.to_string())
            }
            LeagueError::Store(store_error) => ApiError::from(store_error),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        error!("store error: {}", err);
        ApiError::InternalError(format!("Store error: {}", err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use league_core::Entity;

    #[test]
    fn test_league_errors_map_to_status_codes() {
        let cases = [
            (LeagueError::not_found(Entity::Game, 3), StatusCode::NOT_FOUND),
            (LeagueError::InsufficientTeams { found: 1 }, StatusCode::BAD_REQUEST),
            (LeagueError::InvalidInput(String::from("bad")), StatusCode::BAD_REQUEST),
            (LeagueError::Store(StoreError::UnknownGame(3)), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(ApiError::from(err).into_response().status(), status);
        }
    }
}
