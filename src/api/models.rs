use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{LeagueReport, LeagueStats, Player, PlayerWithStats};
use crate::upstream::SnapshotOrigin;

/// Snapshot provenance attached to every response, so the dashboard can
/// flag cached or sample data.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMeta {
    pub origin: SnapshotOrigin,
    pub fetched_at: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueResponse {
    #[serde(flatten)]
    pub report: LeagueReport,
    pub meta: SnapshotMeta,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardResponse {
    pub leaderboard: Vec<Player>,
    pub top_player: Option<Player>,
    pub meta: SnapshotMeta,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub stats: LeagueStats,
    pub meta: SnapshotMeta,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerResponse {
    pub player: PlayerWithStats,
    pub meta: SnapshotMeta,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}
