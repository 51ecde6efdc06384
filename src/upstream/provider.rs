use anyhow::Result;
use chrono::{DateTime, Duration, Utc};
use log::{info, warn};
use serde::Serialize;
use tokio::sync::RwLock;

use super::client::LeagueClient;
use super::fallback;
use crate::cache::SnapshotCache;
use crate::config::AppConfig;
use crate::domain::Snapshot;

/// Where a served snapshot came from, so consumers can tell live data
/// from degraded fallbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SnapshotOrigin {
    Live,
    Cached,
    Sample,
}

#[derive(Debug, Clone)]
pub struct CurrentSnapshot {
    pub snapshot: Snapshot,
    pub origin: SnapshotOrigin,
    pub fetched_at: DateTime<Utc>,
}

/// Serves the freshest snapshot it can get: a recent in-memory copy
/// within the TTL, otherwise a fresh upstream fetch, otherwise the last
/// good snapshot (memory, then file cache), otherwise the built-in
/// sample data. Never fails once constructed.
pub struct SnapshotProvider {
    client: LeagueClient,
    cache: SnapshotCache,
    sample: Snapshot,
    ttl_secs: u64,
    state: RwLock<Option<CurrentSnapshot>>,
}

impl SnapshotProvider {
    pub fn new(config: &AppConfig) -> Result<Self> {
        Ok(Self {
            client: LeagueClient::new(&config.upstream)?,
            cache: SnapshotCache::new(config.league.cache_dir)?,
            sample: fallback::sample_snapshot()?,
            ttl_secs: config.league.snapshot_ttl_secs,
            state: RwLock::new(None),
        })
    }

    pub async fn current(&self) -> CurrentSnapshot {
        if let Some(entry) = self.fresh_entry().await {
            return entry;
        }

        match self.client.fetch_snapshot().await {
            Ok(snapshot) => {
                if let Err(e) = self.cache.save(&snapshot) {
                    warn!("Failed to cache snapshot: {:?}", e);
                }
                let entry = CurrentSnapshot {
                    snapshot,
                    origin: SnapshotOrigin::Live,
                    fetched_at: Utc::now(),
                };
                *self.state.write().await = Some(entry.clone());
                entry
            }
            Err(e) => {
                warn!("Upstream fetch failed: {:?}", e);
                self.degraded().await
            }
        }
    }

    async fn fresh_entry(&self) -> Option<CurrentSnapshot> {
        let state = self.state.read().await;
        let entry = state.as_ref()?;
        let ttl = Duration::seconds(self.ttl_secs as i64);
        let fresh = entry.origin == SnapshotOrigin::Live && Utc::now() - entry.fetched_at < ttl;
        fresh.then(|| entry.clone())
    }

    async fn degraded(&self) -> CurrentSnapshot {
        if let Some(entry) = self.state.read().await.as_ref() {
            let mut entry = entry.clone();
            entry.origin = SnapshotOrigin::Cached;
            return entry;
        }

        match self.cache.load() {
            Ok(Some(snapshot)) => {
                info!("Serving last good snapshot from cache");
                CurrentSnapshot {
                    snapshot,
                    origin: SnapshotOrigin::Cached,
                    fetched_at: Utc::now(),
                }
            }
            Ok(None) => self.sample_entry(),
            Err(e) => {
                warn!("Failed to read snapshot cache: {:?}", e);
                self.sample_entry()
            }
        }
    }

    fn sample_entry(&self) -> CurrentSnapshot {
        warn!("No snapshot available, serving built-in sample data");
        CurrentSnapshot {
            snapshot: self.sample.clone(),
            origin: SnapshotOrigin::Sample,
            fetched_at: Utc::now(),
        }
    }
}
