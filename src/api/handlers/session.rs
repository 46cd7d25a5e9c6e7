use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::Response,
};
use std::sync::Arc;

use super::{bearer_identity, json_response, run_blocking, AppState};
use crate::api::models::SessionResponse;

pub async fn get_session(State(state): State<Arc<AppState>>, headers: HeaderMap) -> Response {
    let identity = bearer_identity(&headers);
    let result = run_blocking(state, move |service| {
        let is_admin = match identity {
            Some(id) => service.is_admin(&id)?,
            None => false,
        };
        Ok(SessionResponse { is_admin })
    })
    .await;
    json_response(result, StatusCode::OK)
}
