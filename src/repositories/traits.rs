//! Common repository traits
//!
//! This module defines the persistence interface the allow-list store
//! talks through. The store never knows where the set of group ids
//! actually lives.

use crate::core::AppError;
use std::collections::HashSet;

/// Persistence round-trip for the allow-list.
///
/// `load` is called once when the store is built; `save` after every
/// in-memory mutation, with a snapshot taken outside any lock the
/// engine holds.
pub trait AllowListBackend: Send + Sync {
    /// Reads the persisted set of auto-approved group ids.
    ///
    /// A missing store is not an error: implementations return an empty
    /// set so a fresh deployment starts clean.
    fn load(&self) -> Result<HashSet<i64>, AppError>;

    /// Persists the full set of auto-approved group ids.
    fn save(&self, groups: &HashSet<i64>) -> Result<(), AppError>;
}
