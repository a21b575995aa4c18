use std::collections::hash_map::DefaultHasher;
use std::fs;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

use crate::domain::RestaurantTable;
use crate::errors::{cache_context, with_parse_context};

/// File-based cache for the normalized table, keyed by source identity.
///
/// Normalization runs once per distinct source content; an envelope with a
/// mismatched hash is treated as stale and ignored.
pub struct TableCache {
    cache_dir: PathBuf,
}

#[derive(Serialize, Deserialize)]
struct CacheEnvelope {
    source_hash: u64,
    cached_at: DateTime<Utc>,
    table: RestaurantTable,
}

impl TableCache {
    /// Create a new cache instance
    pub fn new<P: AsRef<Path>>(cache_dir: P) -> Result<Self> {
        let cache_dir = cache_dir.as_ref().to_path_buf();

        fs::create_dir_all(&cache_dir).context("Failed to create cache directory")?;

        Ok(Self { cache_dir })
    }

    /// Save a normalized table under the given key
    pub fn save(&self, key: &str, source_hash: u64, table: &RestaurantTable) -> Result<()> {
        let file_path = self.entry_path(key);
        let envelope = CacheEnvelope {
            source_hash,
            cached_at: Utc::now(),
            table: table.clone(),
        };

        let json = serde_json::to_string(&envelope).context(cache_context("serialize", key))?;

        fs::write(&file_path, json).context(cache_context("write", key))?;

        info!("Saved normalized table to cache: {}", file_path.display());
        Ok(())
    }

    /// Load a cached table; returns None when absent or stale
    pub fn load(&self, key: &str, source_hash: u64) -> Result<Option<RestaurantTable>> {
        let file_path = self.entry_path(key);

        if !file_path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&file_path).context(cache_context("read", key))?;
        let envelope: CacheEnvelope =
            with_parse_context(serde_json::from_str(&json), "cache envelope")?;

        if envelope.source_hash != source_hash {
            info!("Cache entry for {} is stale, renormalizing", key);
            return Ok(None);
        }

        info!(
            "Using normalized table cached at {} for {}",
            envelope.cached_at, key
        );
        Ok(Some(envelope.table))
    }

    /// Clear all cached data
    pub fn clear(&self) -> Result<()> {
        fs::remove_dir_all(&self.cache_dir).context("Failed to clear cache")?;
        fs::create_dir_all(&self.cache_dir).context("Failed to recreate cache directory")?;

        info!("Cleared cache directory");
        Ok(())
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", key))
    }
}

/// Identity hash of the raw source bytes
pub fn source_hash(bytes: &[u8]) -> u64 {
    let mut hasher = DefaultHasher::new();
    bytes.hash(&mut hasher);
    hasher.finish()
}
