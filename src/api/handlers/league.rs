use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use chrono::Utc;
use std::sync::Arc;

use crate::api::models::{
    ErrorResponse, LeaderboardResponse, LeagueResponse, PlayerResponse, SnapshotMeta,
    StatsResponse,
};
use crate::domain::LeagueReport;
use crate::stats::aggregate;
use crate::upstream::CurrentSnapshot;

use super::AppState;

fn evaluate(current: &CurrentSnapshot) -> (LeagueReport, SnapshotMeta) {
    let report = aggregate(&current.snapshot, Utc::now());
    let meta = SnapshotMeta {
        origin: current.origin,
        fetched_at: current.fetched_at,
    };
    (report, meta)
}

pub async fn get_league(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let current = state.provider.current().await;
    let (report, meta) = evaluate(&current);

    Json(LeagueResponse { report, meta }).into_response()
}

pub async fn get_leaderboard(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let current = state.provider.current().await;
    let (report, meta) = evaluate(&current);

    Json(LeaderboardResponse {
        leaderboard: report.leaderboard,
        top_player: report.top_player,
        meta,
    })
    .into_response()
}

pub async fn get_stats(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let current = state.provider.current().await;
    let (report, meta) = evaluate(&current);

    Json(StatsResponse {
        stats: report.stats,
        meta,
    })
    .into_response()
}

pub async fn get_player_detail(
    State(state): State<Arc<AppState>>,
    Path(username): Path<String>,
) -> impl IntoResponse {
    let current = state.provider.current().await;
    let (report, meta) = evaluate(&current);

    match report
        .player_stats
        .into_iter()
        .find(|p| p.username == username)
    {
        Some(player) => Json(PlayerResponse { player, meta }).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Player '{}' not found", username),
            }),
        )
            .into_response(),
    }
}
