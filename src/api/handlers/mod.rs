use anyhow::{Context, Result};
use axum::{
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::api::models::ErrorResponse;
use crate::errors::LeagueError;
use crate::services::league::LeagueService;
use crate::store::SqliteStore;

pub mod games;
pub mod players;
pub mod session;
pub mod standings;

pub struct AppState {
    pub service: LeagueService<SqliteStore>,
}

/// Runs store work off the async runtime.
pub async fn run_blocking<T, F>(state: Arc<AppState>, task: F) -> Result<T>
where
    F: FnOnce(&LeagueService<SqliteStore>) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || task(&state.service))
        .await
        .context("Store task did not complete")?
}

/// Identity from an `Authorization: Bearer <identity>` header
pub fn bearer_identity(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|identity| !identity.is_empty())
        .map(str::to_string)
}

pub fn json_response<T: Serialize>(result: Result<T>, status: StatusCode) -> Response {
    match result {
        Ok(body) => (status, Json(body)).into_response(),
        Err(e) => error_response(e),
    }
}

pub fn empty_response(result: Result<()>) -> Response {
    match result {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}

pub fn error_response(error: anyhow::Error) -> Response {
    let status = match error.downcast_ref::<LeagueError>() {
        Some(LeagueError::InvalidRecord(_)) => StatusCode::BAD_REQUEST,
        Some(LeagueError::PlayerExists(_))
        | Some(LeagueError::PlayerHasGames(_))
        | Some(LeagueError::AlreadyPlayed { .. }) => StatusCode::CONFLICT,
        Some(LeagueError::PlayerNotFound(_)) | Some(LeagueError::GameNotFound(_)) => {
            StatusCode::NOT_FOUND
        }
        Some(LeagueError::Unauthorized) => StatusCode::UNAUTHORIZED,
        None => {
            log::error!("Request failed: {:?}", error);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    let body = ErrorResponse {
        error: error.to_string(),
    };
    (status, Json(body)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_identity() {
        assert_eq!(bearer_identity(&headers_with("Bearer owner")), Some("owner".to_string()));
        assert_eq!(bearer_identity(&headers_with("Basic abc")), None);
        assert_eq!(bearer_identity(&headers_with("Bearer   ")), None);
        assert_eq!(bearer_identity(&HeaderMap::new()), None);
    }

    #[test]
    fn test_error_status_mapping() {
        let cases = [
            (LeagueError::invalid("bad"), StatusCode::BAD_REQUEST),
            (LeagueError::PlayerExists("A".into()), StatusCode::CONFLICT),
            (LeagueError::PlayerHasGames("A".into()), StatusCode::CONFLICT),
            (LeagueError::PlayerNotFound("A".into()), StatusCode::NOT_FOUND),
            (LeagueError::GameNotFound(3), StatusCode::NOT_FOUND),
            (LeagueError::Unauthorized, StatusCode::UNAUTHORIZED),
        ];
        for (error, status) in cases {
            assert_eq!(error_response(error.into()).status(), status);
        }
        assert_eq!(
            error_response(anyhow::anyhow!("disk on fire")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
