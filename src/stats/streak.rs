use std::cmp::Ordering;

use crate::domain::Game;

/// Consecutive wins counted from the chronologically most recent game
/// backward; 0 when the most recent game was not a win or there are none.
pub fn current_streak(username: &str, games: &[&Game]) -> u32 {
    let mut streak = 0;
    for game in most_recent_first(games) {
        if game.winner == username {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Dated games in date-descending order; undated games sort as "oldest",
/// after all dated ones, keeping their original relative order (stable sort).
fn most_recent_first<'a>(games: &[&'a Game]) -> Vec<&'a Game> {
    let mut ordered = games.to_vec();
    ordered.sort_by(|a, b| match (a.date, b.date) {
        (Some(a_date), Some(b_date)) => b_date.cmp(&a_date),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn game(id: i64, winner: &str, epoch_secs: Option<i64>) -> Game {
        Game {
            id: Some(id),
            players: vec!["a".to_string(), "b".to_string()],
            winner: winner.to_string(),
            date: epoch_secs.map(|s| Utc.timestamp_opt(s, 0).unwrap()),
        }
    }

    #[test]
    fn test_streak_counts_back_from_most_recent() {
        let games = vec![
            game(1, "b", Some(100)),
            game(2, "a", Some(300)),
            game(3, "a", Some(200)),
        ];
        let refs: Vec<&Game> = games.iter().collect();

        // Ordered by date: 2 (win), 3 (win), 1 (loss)
        assert_eq!(current_streak("a", &refs), 2);
    }

    #[test]
    fn test_streak_zero_when_latest_game_lost() {
        let games = vec![game(1, "a", Some(100)), game(2, "b", Some(200))];
        let refs: Vec<&Game> = games.iter().collect();

        assert_eq!(current_streak("a", &refs), 0);
    }

    #[test]
    fn test_streak_zero_without_games() {
        assert_eq!(current_streak("a", &[]), 0);
    }

    #[test]
    fn test_undated_games_sort_as_oldest() {
        // The undated loss must not interrupt the streak formed by the
        // two dated wins in front of it.
        let games = vec![
            game(1, "b", None),
            game(2, "a", Some(200)),
            game(3, "a", Some(100)),
        ];
        let refs: Vec<&Game> = games.iter().collect();

        assert_eq!(current_streak("a", &refs), 2);
    }

    #[test]
    fn test_undated_games_keep_relative_order() {
        // All undated: original order decides, most recent first is just
        // the original order, so the leading win counts before the loss.
        let games = vec![game(1, "a", None), game(2, "b", None)];
        let refs: Vec<&Game> = games.iter().collect();

        assert_eq!(current_streak("a", &refs), 1);
    }
}
