use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::info;

use crate::domain::Snapshot;

const SNAPSHOT_FILE: &str = "snapshot.json";

/// File-based cache holding the last successfully fetched snapshot, so
/// a restart can keep serving data while the upstream backend is down.
pub struct SnapshotCache {
    cache_dir: PathBuf,
}

impl SnapshotCache {
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();
        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;
        Ok(Self { cache_dir })
    }

    pub fn save(&self, snapshot: &Snapshot) -> Result<()> {
        let file_path = self.snapshot_path();
        let json =
            serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
        fs::write(&file_path, json).context("Failed to write cache file")?;
        info!("Saved snapshot to cache: {}", file_path.display());
        Ok(())
    }

    pub fn load(&self) -> Result<Option<Snapshot>> {
        let file_path = self.snapshot_path();
        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).context("Failed to read cache file")?;
        let snapshot = Snapshot::from_json(&json)
            .with_context(|| format!("Failed to parse cached snapshot at {:?}", file_path))?;

        info!("Loaded snapshot from cache: {}", file_path.display());
        Ok(Some(snapshot))
    }

    pub fn clear(&self) -> Result<()> {
        let file_path = self.snapshot_path();
        if file_path.exists() {
            fs::remove_file(&file_path).context("Failed to clear cached snapshot")?;
        }
        Ok(())
    }

    fn snapshot_path(&self) -> PathBuf {
        self.cache_dir.join(SNAPSHOT_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::fallback;

    #[test]
    fn test_cache_save_and_load() {
        let temp_dir = std::env::temp_dir().join("pingpong_league_test_cache");
        let cache = SnapshotCache::new(&temp_dir).unwrap();

        let snapshot = fallback::sample_snapshot().unwrap();
        cache.save(&snapshot).unwrap();
        let loaded = cache.load().unwrap();

        assert_eq!(loaded, Some(snapshot));

        // Cleanup
        cache.clear().unwrap();
        assert_eq!(cache.load().unwrap(), None);
    }
}
