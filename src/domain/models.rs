use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Badge earned by a player, opaque pass-through from the backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Achievement {
    pub badge_id: String,
    pub name: String,
    pub description: String,
    pub icon_url: String,
}

/// Player as reported by the league backend
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub username: String,
    pub elo: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<Achievement>>,
}

/// Single game result. `date` travels as Unix epoch seconds (or null);
/// `id` may be absent upstream and gets synthesized during normalization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Game {
    #[serde(default)]
    pub id: Option<i64>,
    pub players: Vec<String>,
    pub winner: String,
    #[serde(default, with = "chrono::serde::ts_seconds_option")]
    pub date: Option<DateTime<Utc>>,
}

impl Game {
    /// Whether the given username is listed as a participant.
    pub fn involves(&self, username: &str) -> bool {
        self.players.iter().any(|p| p == username)
    }
}

/// Player enriched with derived statistics
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlayerWithStats {
    pub username: String,
    pub elo: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub achievements: Option<Vec<Achievement>>,
    pub wins: u32,
    pub losses: u32,
    pub games_played: u32,
    /// Win percentage in [0, 100], rounded half-up
    pub win_rate: u32,
    /// Consecutive wins counted from the most recent game backward
    pub current_streak: u32,
    /// 1-based position in the ELO-descending ordering
    pub rank: usize,
}

/// League-wide summary statistics
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueStats {
    pub total_players: usize,
    pub total_games: usize,
    pub avg_elo: i32,
    pub highest_streak: u32,
    pub games_this_week: usize,
    pub active_players: usize,
}

/// Full aggregation output consumed by presentation layers
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LeagueReport {
    pub players: Vec<Player>,
    pub games: Vec<Game>,
    pub player_stats: Vec<PlayerWithStats>,
    pub leaderboard: Vec<Player>,
    pub top_player: Option<Player>,
    pub stats: LeagueStats,
}
