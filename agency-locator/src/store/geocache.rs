//! Disk-backed GeoCache of agency records.
//!
//! The cache holds one snapshot of the whole directory. Replacement is
//! whole-of-store: `put_all` writes a complete new snapshot, there is no
//! per-id upsert or delete. The snapshot survives restarts; a cold start
//! with an existing file re-reads it instead of re-importing.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::Agency;

use super::error::StoreError;

/// On-disk snapshot with metadata.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    /// When the snapshot was written.
    written_at: DateTime<Utc>,
    /// The complete agency directory.
    agencies: Vec<Agency>,
}

/// Configuration for the GeoCache.
#[derive(Debug, Clone)]
pub struct GeoCacheConfig {
    /// Path to the snapshot file.
    pub path: PathBuf,
}

impl GeoCacheConfig {
    /// Create a new config with the given snapshot path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for GeoCacheConfig {
    fn default() -> Self {
        Self::new("agency_geocache.json")
    }
}

/// Persistent store of agency records.
///
/// Constructed explicitly and injected into the importer, seed fallback
/// and resolver; there is no process-wide shared handle. Two instances
/// pointed at the same path share the file, nothing else.
#[derive(Debug, Clone)]
pub struct GeoCache {
    config: GeoCacheConfig,
}

impl GeoCache {
    /// Create a GeoCache over the given snapshot file.
    pub fn new(config: GeoCacheConfig) -> Self {
        Self { config }
    }

    /// Replace the entire store with `agencies`.
    ///
    /// Callers must pass a complete snapshot; this is a replace, not a
    /// merge. The new snapshot is written to a temporary file and renamed
    /// over the old one, so readers see either the old or the new
    /// directory, never a torn file. Creates parent directories if needed.
    pub fn put_all(&self, agencies: &[Agency]) -> Result<(), StoreError> {
        let snapshot = Snapshot {
            written_at: Utc::now(),
            agencies: agencies.to_vec(),
        };

        if let Some(parent) = self.config.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| StoreError::Io {
                message: format!("failed to create store directory: {}", e),
            })?;
        }

        let json = serde_json::to_string_pretty(&snapshot).map_err(|e| StoreError::Serialize {
            message: e.to_string(),
        })?;

        let tmp = self.config.path.with_extension("json.tmp");
        std::fs::write(&tmp, json).map_err(|e| StoreError::Io {
            message: format!("failed to write snapshot: {}", e),
        })?;
        std::fs::rename(&tmp, &self.config.path).map_err(|e| StoreError::Io {
            message: format!("failed to replace snapshot: {}", e),
        })?;

        Ok(())
    }

    /// Read every stored agency, in stored order.
    ///
    /// Stored order is meaningful: the resolver's distance ranking breaks
    /// ties by it. A missing or unreadable snapshot reads as empty.
    pub fn get_all(&self) -> Vec<Agency> {
        self.read_snapshot()
            .map(|s| s.agencies)
            .unwrap_or_default()
    }

    /// Number of stored agencies.
    pub fn count(&self) -> usize {
        self.read_snapshot().map(|s| s.agencies.len()).unwrap_or(0)
    }

    /// Whether the store holds no agencies.
    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Get the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.config.path
    }

    fn read_snapshot(&self) -> Option<Snapshot> {
        let contents = std::fs::read_to_string(&self.config.path).ok()?;
        serde_json::from_str(&contents).ok()
    }
}
