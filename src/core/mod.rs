//! Core Module - Infrastructure components of the engine
//!
//! This module contains the "core" pieces every other layer leans on:
//! - Error handling
//! - Shared application state
//! - Tracing initialization

pub mod error;
pub mod state;

// Re-exports to ease imports
pub use error::{AppError, ErrorKind};
pub use state::AppState;

use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber, honoring `RUST_LOG`.
/// Embedders call this once at startup; calling it twice is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
