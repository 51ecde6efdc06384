use chrono::{DateTime, Duration, Utc};

use crate::domain::{Game, LeagueStats, Player, PlayerWithStats, Snapshot};

/// Window for "this week" counts, trailing relative to the caller's `now`.
const ACTIVITY_WINDOW_DAYS: i64 = 7;

/// League-wide summary over one snapshot. `player_stats` must already
/// carry computed streaks.
pub fn summarize(
    snapshot: &Snapshot,
    player_stats: &[PlayerWithStats],
    now: DateTime<Utc>,
) -> LeagueStats {
    let window_start = now - Duration::days(ACTIVITY_WINDOW_DAYS);
    let any_dated = snapshot.games.iter().any(|g| g.date.is_some());

    // Degraded mode: with no dates anywhere in the snapshot the weekly
    // figures fall back to the full counts rather than erroring.
    let games_this_week = if any_dated {
        snapshot
            .games
            .iter()
            .filter(|g| in_window(g, window_start))
            .count()
    } else {
        snapshot.games.len()
    };

    let active_players = if any_dated {
        snapshot
            .players
            .iter()
            .filter(|p| played_this_week(p, &snapshot.games, window_start))
            .count()
    } else {
        snapshot.players.len()
    };

    LeagueStats {
        total_players: snapshot.players.len(),
        total_games: snapshot.games.len(),
        avg_elo: mean_elo(&snapshot.players),
        highest_streak: player_stats
            .iter()
            .map(|p| p.current_streak)
            .max()
            .unwrap_or(0),
        games_this_week,
        active_players,
    }
}

fn in_window(game: &Game, window_start: DateTime<Utc>) -> bool {
    game.date.is_some_and(|date| date >= window_start)
}

fn played_this_week(player: &Player, games: &[Game], window_start: DateTime<Utc>) -> bool {
    games
        .iter()
        .any(|g| g.involves(&player.username) && in_window(g, window_start))
}

/// Rounded mean ELO; defined as 0 for an empty league.
fn mean_elo(players: &[Player]) -> i32 {
    if players.is_empty() {
        return 0;
    }
    let total: i64 = players.iter().map(|p| i64::from(p.elo)).sum();
    (total as f64 / players.len() as f64).round() as i32
}
