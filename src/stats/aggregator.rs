use chrono::{DateTime, Utc};

use super::{league, streak};
use crate::domain::{Game, LeagueReport, Player, PlayerWithStats, Snapshot};

/// Derive ranked per-player statistics and the league summary from one
/// snapshot. Pure: the snapshot is never mutated, `now` is the reference
/// clock for the weekly figures, and identical inputs yield identical
/// output.
pub fn aggregate(snapshot: &Snapshot, now: DateTime<Utc>) -> LeagueReport {
    let mut player_stats: Vec<PlayerWithStats> = snapshot
        .players
        .iter()
        .map(|player| enrich(player, &snapshot.games))
        .collect();

    // Stable sort: equal ELOs keep input order, so ranks stay sequential
    // and deterministic even on ties.
    player_stats.sort_by(|a, b| b.elo.cmp(&a.elo));
    for (idx, entry) in player_stats.iter_mut().enumerate() {
        entry.rank = idx + 1;
    }

    let mut leaderboard = snapshot.players.clone();
    leaderboard.sort_by(|a, b| b.elo.cmp(&a.elo));
    let top_player = leaderboard.first().cloned();

    let stats = league::summarize(snapshot, &player_stats, now);

    LeagueReport {
        players: snapshot.players.clone(),
        games: snapshot.games.clone(),
        player_stats,
        leaderboard,
        top_player,
        stats,
    }
}

fn enrich(player: &Player, games: &[Game]) -> PlayerWithStats {
    let player_games: Vec<&Game> = games
        .iter()
        .filter(|g| g.involves(&player.username))
        .collect();

    let wins = player_games
        .iter()
        .filter(|g| g.winner == player.username)
        .count() as u32;
    // A game whose recorded winner matches neither participant still
    // counts as played, so it lands on the loss side for both listed
    // players. Defined accounting policy, carried from the backend.
    let losses = player_games.len() as u32 - wins;

    PlayerWithStats {
        username: player.username.clone(),
        elo: player.elo,
        achievements: player.achievements.clone(),
        wins,
        losses,
        games_played: player_games.len() as u32,
        win_rate: win_rate(wins, player_games.len() as u32),
        current_streak: streak::current_streak(&player.username, &player_games),
        rank: 0, // assigned after the ELO sort above
    }
}

/// Win percentage in [0, 100], rounded half-up; 0 without games.
fn win_rate(wins: u32, played: u32) -> u32 {
    if played == 0 {
        return 0;
    }
    (f64::from(wins) * 100.0 / f64::from(played)).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::fallback;
    use chrono::TimeZone;

    fn player(username: &str, elo: i32) -> Player {
        Player {
            username: username.to_string(),
            elo,
            achievements: None,
        }
    }

    fn game(id: i64, players: [&str; 2], winner: &str, epoch_secs: i64) -> Game {
        Game {
            id: Some(id),
            players: players.iter().map(|p| p.to_string()).collect(),
            winner: winner.to_string(),
            date: Some(Utc.timestamp_opt(epoch_secs, 0).unwrap()),
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.timestamp_opt(1_720_000_000, 0).unwrap()
    }

    #[test]
    fn test_sample_dataset_totals() {
        let snapshot = fallback::sample_snapshot().unwrap();
        let report = aggregate(&snapshot, now());

        assert_eq!(report.stats.total_players, 4);
        assert_eq!(report.stats.total_games, 8);
        assert_eq!(report.leaderboard[0].username, "Oli");
        assert_eq!(report.top_player.as_ref().unwrap().username, "Oli");
        assert_eq!(report.stats.avg_elo, 412);

        let oli = report
            .player_stats
            .iter()
            .find(|p| p.username == "Oli")
            .unwrap();
        assert_eq!(oli.wins, 5);
        assert_eq!(oli.losses, 0);
        assert_eq!(oli.win_rate, 100);
        assert_eq!(oli.current_streak, 5);
        assert_eq!(oli.rank, 1);
    }

    #[test]
    fn test_wins_plus_losses_equals_games_played() {
        let snapshot = fallback::sample_snapshot().unwrap();
        let report = aggregate(&snapshot, now());

        for entry in &report.player_stats {
            assert_eq!(entry.wins + entry.losses, entry.games_played);
            assert!(entry.win_rate <= 100);
            assert!(entry.current_streak <= entry.games_played);
        }
    }

    #[test]
    fn test_ranks_are_dense_and_follow_elo() {
        let snapshot = fallback::sample_snapshot().unwrap();
        let report = aggregate(&snapshot, now());

        for (idx, entry) in report.player_stats.iter().enumerate() {
            assert_eq!(entry.rank, idx + 1);
            if idx > 0 {
                assert!(report.player_stats[idx - 1].elo >= entry.elo);
            }
        }
    }

    #[test]
    fn test_elo_ties_keep_input_order() {
        let snapshot = Snapshot {
            players: vec![player("first", 400), player("second", 400), player("third", 450)],
            games: vec![],
        };
        let report = aggregate(&snapshot, now());

        let order: Vec<&str> = report
            .player_stats
            .iter()
            .map(|p| p.username.as_str())
            .collect();
        assert_eq!(order, vec!["third", "first", "second"]);
        let ranks: Vec<usize> = report.player_stats.iter().map(|p| p.rank).collect();
        assert_eq!(ranks, vec![1, 2, 3]);
    }

    #[test]
    fn test_win_rate_rounds_half_up() {
        // 1 of 8 games is 12.5%, reported as 13
        let games: Vec<Game> = (0..8)
            .map(|i| {
                let winner = if i == 0 { "a" } else { "b" };
                game(i + 1, ["a", "b"], winner, 1_000_000 + i)
            })
            .collect();
        let snapshot = Snapshot {
            players: vec![player("a", 400), player("b", 400)],
            games,
        };
        let report = aggregate(&snapshot, now());

        let a = report.player_stats.iter().find(|p| p.username == "a").unwrap();
        assert_eq!(a.win_rate, 13);
    }

    #[test]
    fn test_foreign_winner_counts_as_loss_for_both() {
        let snapshot = Snapshot {
            players: vec![player("a", 400), player("b", 350)],
            games: vec![game(1, ["a", "b"], "nobody", 1_000_000)],
        };
        let report = aggregate(&snapshot, now());

        for entry in &report.player_stats {
            assert_eq!(entry.games_played, 1);
            assert_eq!(entry.wins, 0);
            assert_eq!(entry.losses, 1);
            assert_eq!(entry.current_streak, 0);
        }
    }

    #[test]
    fn test_games_of_unknown_players_are_tolerated() {
        let snapshot = Snapshot {
            players: vec![player("a", 400)],
            games: vec![
                game(1, ["ghost", "phantom"], "ghost", 1_000_000),
                game(2, ["a", "ghost"], "a", 1_000_001),
            ],
        };
        let report = aggregate(&snapshot, now());

        let a = &report.player_stats[0];
        assert_eq!(a.games_played, 1);
        assert_eq!(a.wins, 1);
        // Unknown participants still count toward the league game total
        assert_eq!(report.stats.total_games, 2);
    }

    #[test]
    fn test_empty_snapshot() {
        let report = aggregate(&Snapshot::default(), now());

        assert!(report.player_stats.is_empty());
        assert!(report.leaderboard.is_empty());
        assert_eq!(report.top_player, None);
        assert_eq!(report.stats.total_players, 0);
        assert_eq!(report.stats.total_games, 0);
        assert_eq!(report.stats.avg_elo, 0);
        assert_eq!(report.stats.highest_streak, 0);
    }

    #[test]
    fn test_aggregation_is_idempotent() {
        let snapshot = fallback::sample_snapshot().unwrap();
        let at = now();

        assert_eq!(aggregate(&snapshot, at), aggregate(&snapshot, at));
    }

    #[test]
    fn test_inputs_are_not_mutated() {
        let snapshot = fallback::sample_snapshot().unwrap();
        let before = snapshot.clone();
        let _ = aggregate(&snapshot, now());

        assert_eq!(snapshot, before);
    }

    #[test]
    fn test_highest_streak_matches_player_stats() {
        let snapshot = fallback::sample_snapshot().unwrap();
        let report = aggregate(&snapshot, now());

        let max = report
            .player_stats
            .iter()
            .map(|p| p.current_streak)
            .max()
            .unwrap();
        assert_eq!(report.stats.highest_streak, max);
        assert_eq!(report.stats.highest_streak, 5);
    }
}
