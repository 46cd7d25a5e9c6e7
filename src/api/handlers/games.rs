use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Json, Response},
};
use std::sync::Arc;

use super::{bearer_identity, empty_response, json_response, run_blocking, AppState};
use crate::api::models::RecordGameRequest;
use crate::domain::GameId;

pub async fn record_game(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<RecordGameRequest>,
) -> Response {
    let identity = bearer_identity(&headers);
    let result = run_blocking(state, move |service| {
        service.authorize(identity.as_deref())?;
        service.record_game(&request.winner_name, &request.loser_name, &request.score)
    })
    .await;
    json_response(result, StatusCode::CREATED)
}

pub async fn delete_game(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(game_id): Path<GameId>,
) -> Response {
    let identity = bearer_identity(&headers);
    let result = run_blocking(state, move |service| {
        service.authorize(identity.as_deref())?;
        service.delete_game(game_id)
    })
    .await;
    empty_response(result)
}
