use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Json, Response},
};
use std::sync::Arc;

use super::{bearer_identity, empty_response, json_response, run_blocking, AppState};
use crate::api::models::NewPlayerRequest;

pub async fn list_players(State(state): State<Arc<AppState>>) -> Response {
    let result = run_blocking(state, |service| service.roster()).await;
    json_response(result, StatusCode::OK)
}

pub async fn get_player_history(
    State(state): State<Arc<AppState>>,
    Path(player_name): Path<String>,
) -> Response {
    let result = run_blocking(state, move |service| service.player_history(&player_name)).await;
    json_response(result, StatusCode::OK)
}

pub async fn create_player(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(request): Json<NewPlayerRequest>,
) -> Response {
    let identity = bearer_identity(&headers);
    let result = run_blocking(state, move |service| {
        service.authorize(identity.as_deref())?;
        service.register_player(&request.player_name, request.handicap)
    })
    .await;
    json_response(result, StatusCode::CREATED)
}

pub async fn delete_player(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Path(player_name): Path<String>,
) -> Response {
    let identity = bearer_identity(&headers);
    let result = run_blocking(state, move |service| {
        service.authorize(identity.as_deref())?;
        service.delete_player(&player_name)
    })
    .await;
    empty_response(result)
}

pub async fn get_unfinished_players(State(state): State<Arc<AppState>>) -> Response {
    let result = run_blocking(state, |service| service.unfinished_players()).await;
    json_response(result, StatusCode::OK)
}

pub async fn get_eligible_opponents(
    State(state): State<Arc<AppState>>,
    Path(winner_name): Path<String>,
) -> Response {
    let result = run_blocking(state, move |service| service.eligible_opponents(&winner_name)).await;
    json_response(result, StatusCode::OK)
}
