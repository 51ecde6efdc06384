use anyhow::{Context, Result};

use crate::domain::Snapshot;

/// Last-resort dataset served when the upstream backend is unreachable
/// and no cached snapshot exists. Four players, eight games.
const SAMPLE_DATA: &str = include_str!("sample_data.json");

pub fn sample_snapshot() -> Result<Snapshot> {
    Snapshot::from_json(SAMPLE_DATA).context("Failed to parse embedded sample data")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_data_parses() {
        let snapshot = sample_snapshot().unwrap();
        assert_eq!(snapshot.players.len(), 4);
        assert_eq!(snapshot.games.len(), 8);
    }

    #[test]
    fn test_sample_games_are_dated_and_identified() {
        let snapshot = sample_snapshot().unwrap();
        assert!(snapshot.games.iter().all(|g| g.id.is_some()));
        assert!(snapshot.games.iter().all(|g| g.date.is_some()));
    }

    #[test]
    fn test_sample_winners_are_participants() {
        let snapshot = sample_snapshot().unwrap();
        assert!(snapshot.games.iter().all(|g| g.involves(&g.winner)));
    }
}
