use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;

use crate::api::handlers::{
    games::{delete_game, record_game},
    players::{
        create_player, delete_player, get_eligible_opponents, get_player_history,
        get_unfinished_players, list_players,
    },
    session::get_session,
    standings::get_standings,
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/standings", get(get_standings))
        .route("/api/players", get(list_players).post(create_player))
        .route("/api/players/:name", get(get_player_history).delete(delete_player))
        .route("/api/eligibility/unfinished", get(get_unfinished_players))
        .route("/api/eligibility/:name/opponents", get(get_eligible_opponents))
        .route("/api/games", post(record_game))
        .route("/api/games/:id", delete(delete_game))
        .route("/api/session", get(get_session))
        .with_state(state)
}
