//! Repositories module - Persistence for the allow-list
//!
//! The engine keeps the allow-list in memory and funnels every
//! load/save through the `AllowListBackend` trait, so the storage
//! location (JSON file, test memory, the host's own config store) is
//! swappable.

pub mod allow_list;
pub mod traits;

// Re-exports to ease imports
pub use allow_list::{AllowListStore, JsonFileBackend, MemoryBackend};
pub use traits::AllowListBackend;
