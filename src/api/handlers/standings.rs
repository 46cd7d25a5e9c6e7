use axum::{extract::State, http::StatusCode, response::Response};
use std::sync::Arc;

use super::{json_response, run_blocking, AppState};
use crate::api::models::StandingsResponse;

pub async fn get_standings(State(state): State<Arc<AppState>>) -> Response {
    let result = run_blocking(state, |service| service.standings()).await;
    json_response(result.map(StandingsResponse::from), StatusCode::OK)
}
