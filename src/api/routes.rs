use axum::{routing::get, Router};
use std::sync::Arc;

use crate::api::handlers::{
    league::{get_leaderboard, get_league, get_player_detail, get_stats},
    AppState,
};

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/api/league", get(get_league))
        .route("/api/leaderboard", get(get_leaderboard))
        .route("/api/stats", get(get_stats))
        .route("/api/player/:username", get(get_player_detail))
        .with_state(state)
}
