use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use colored::Colorize;

use crate::config::AppConfig;
use crate::domain::{LeagueReport, Snapshot};
use crate::stats::aggregate;
use crate::upstream::LeagueClient;

/// Prints a league report to the terminal, from a snapshot file or the
/// upstream backend.
pub struct ReportService {
    file: Option<PathBuf>,
    upstream: Option<String>,
    config: AppConfig,
}

impl ReportService {
    pub fn new(file: Option<PathBuf>, upstream: Option<String>, config: AppConfig) -> Self {
        Self {
            file,
            upstream,
            config,
        }
    }

    pub async fn run(&self) -> Result<()> {
        let snapshot = self.load_snapshot().await?;
        let report = aggregate(&snapshot, Utc::now());
        print_report(&report);
        Ok(())
    }

    async fn load_snapshot(&self) -> Result<Snapshot> {
        if let Some(path) = &self.file {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read snapshot file: {}", path.display()))?;
            return Snapshot::from_json(&text);
        }

        let mut config = self.config.clone();
        config.upstream.apply_override(self.upstream.clone());
        let client = LeagueClient::new(&config.upstream)?;
        client.fetch_snapshot().await
    }
}

fn print_report(report: &LeagueReport) {
    let stats = &report.stats;

    println!("{}", "Ping-Pong League".bold().underline());
    println!(
        "Players: {}   Games: {}   Avg ELO: {}",
        stats.total_players, stats.total_games, stats.avg_elo
    );
    println!(
        "This week: {} games, {} active players   Longest streak: {}",
        stats.games_this_week, stats.active_players, stats.highest_streak
    );

    if let Some(top) = &report.top_player {
        println!(
            "Top player: {} ({} ELO)",
            top.username.yellow().bold(),
            top.elo
        );
    }

    println!();
    println!(
        "{:<5} {:<16} {:>5} {:>4} {:>4} {:>6} {:>7}",
        "Rank".bold(),
        "Player".bold(),
        "ELO",
        "W",
        "L",
        "Win %",
        "Streak"
    );
    for entry in &report.player_stats {
        let name = if entry.rank == 1 {
            entry.username.green().bold().to_string()
        } else {
            entry.username.clone()
        };
        println!(
            "{:<5} {:<16} {:>5} {:>4} {:>4} {:>5}% {:>7}",
            entry.rank,
            name,
            entry.elo,
            entry.wins,
            entry.losses,
            entry.win_rate,
            entry.current_streak
        );
    }
}
