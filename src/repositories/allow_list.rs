//! AllowListStore - The set of groups pre-authorized for auto-approval

use super::AllowListBackend;
use crate::core::AppError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// On-disk shape of the allow-list file
#[derive(Serialize, Deserialize, Debug, Default)]
struct AllowListFile {
    allow_groups: Vec<i64>,
}

/// JSON-file persistence for the allow-list
pub struct JsonFileBackend {
    path: PathBuf,
}

impl JsonFileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl AllowListBackend for JsonFileBackend {
    fn load(&self) -> Result<HashSet<i64>, AppError> {
        if !self.path.is_file() {
            warn!("Allow-list file {:?} not found, starting empty", self.path);
            return Ok(HashSet::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        let file: AllowListFile = serde_json::from_str(&raw)?;
        Ok(file.allow_groups.into_iter().collect())
    }

    fn save(&self, groups: &HashSet<i64>) -> Result<(), AppError> {
        let mut allow_groups: Vec<i64> = groups.iter().copied().collect();
        allow_groups.sort_unstable();
        let raw = serde_json::to_string(&AllowListFile { allow_groups })?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory persistence, for tests and embedders that keep the
/// allow-list elsewhere.
#[derive(Default)]
pub struct MemoryBackend {
    groups: std::sync::Mutex<HashSet<i64>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_groups(groups: impl IntoIterator<Item = i64>) -> Self {
        Self {
            groups: std::sync::Mutex::new(groups.into_iter().collect()),
        }
    }
}

impl AllowListBackend for MemoryBackend {
    fn load(&self) -> Result<HashSet<i64>, AppError> {
        let groups = self.groups.lock().unwrap_or_else(|e| e.into_inner());
        Ok(groups.clone())
    }

    fn save(&self, groups: &HashSet<i64>) -> Result<(), AppError> {
        let mut stored = self.groups.lock().unwrap_or_else(|e| e.into_inner());
        *stored = groups.clone();
        Ok(())
    }
}

/// The live allow-list: an in-memory set guarded by its own lock,
/// independent of the pending queue's lock, persisted through the
/// backend after each mutation.
pub struct AllowListStore {
    groups: Mutex<HashSet<i64>>,
    backend: Arc<dyn AllowListBackend>,
}

impl AllowListStore {
    pub fn new(backend: Arc<dyn AllowListBackend>) -> Result<Self, AppError> {
        let groups = backend.load()?;
        debug!(count = groups.len(), "Allow-list loaded");
        Ok(Self {
            groups: Mutex::new(groups),
            backend,
        })
    }

    pub async fn contains(&self, group_id: i64) -> bool {
        self.groups.lock().await.contains(&group_id)
    }

    /// Adds a group id. Returns `Ok(false)` without persisting when the
    /// id was already present.
    pub async fn add(&self, group_id: i64) -> Result<bool, AppError> {
        // Snapshot under the lock, persist after releasing it
        let snapshot = {
            let mut groups = self.groups.lock().await;
            if !groups.insert(group_id) {
                return Ok(false);
            }
            groups.clone()
        };
        self.backend.save(&snapshot)?;
        Ok(true)
    }

    /// Removes a group id. Returns `Ok(false)` without persisting when
    /// the id was absent.
    pub async fn remove(&self, group_id: i64) -> Result<bool, AppError> {
        let snapshot = {
            let mut groups = self.groups.lock().await;
            if !groups.remove(&group_id) {
                return Ok(false);
            }
            groups.clone()
        };
        self.backend.save(&snapshot)?;
        Ok(true)
    }
}
