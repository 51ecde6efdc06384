use std::time::Duration;

use anyhow::{Context, Result};
use log::info;
use reqwest::Client;

use crate::config::settings::UpstreamSettings;
use crate::domain::Snapshot;

/// Client for the external league backend owning players, games and ELO.
pub struct LeagueClient {
    client: Client,
    base_url: String,
}

impl LeagueClient {
    pub fn new(settings: &UpstreamSettings) -> Result<Self> {
        let client = Self::build_client(settings.user_agent, settings.timeout_secs)?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch the current `{players, games}` snapshot.
    pub async fn fetch_snapshot(&self) -> Result<Snapshot> {
        let url = format!("{}/get_data", self.base_url);
        info!("Fetching league snapshot from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch from: {}", url))?;

        if !response.status().is_success() {
            anyhow::bail!("Upstream returned status: {}", response.status());
        }

        let text = response
            .text()
            .await
            .context("Failed to read upstream response body")?;
        let snapshot = Snapshot::from_json(&text)?;

        info!(
            "Fetched snapshot: {} players, {} games",
            snapshot.players.len(),
            snapshot.games.len()
        );
        Ok(snapshot)
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }
}
