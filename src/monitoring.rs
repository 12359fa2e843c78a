//! Background monitoring of the pending-invite backlog
//!
//! Periodically logs how many invites are waiting on a human decision,
//! escalating to a warning once the backlog passes a threshold. Meant
//! to be spawned by the host next to the engine.

use crate::core::AppState;
use std::sync::Arc;
use std::time::Duration;
use tokio::time;
use tracing::{info, warn};

/// Configuration for the backlog monitor
pub struct QueueMonitorConfig {
    /// Logging interval in seconds
    pub interval_secs: u64,
    /// Backlog size at which the periodic line becomes a warning
    pub warn_threshold: usize,
}

impl Default for QueueMonitorConfig {
    fn default() -> Self {
        Self {
            interval_secs: 300, // 5 minutes
            warn_threshold: 10,
        }
    }
}

/// Monitoring task that runs for the lifetime of the engine
///
/// # Example
///
/// ```rust,no_run
/// use invite_warden::monitoring::{QueueMonitorConfig, start_queue_monitoring};
/// # fn demo(state: std::sync::Arc<invite_warden::AppState>) {
/// tokio::spawn(start_queue_monitoring(state, QueueMonitorConfig::default()));
/// # }
/// ```
pub async fn start_queue_monitoring(state: Arc<AppState>, config: QueueMonitorConfig) {
    info!(
        "Starting queue monitoring with interval: {} seconds",
        config.interval_secs
    );

    let mut interval = time::interval(Duration::from_secs(config.interval_secs));
    // Skip the tick that fires immediately
    interval.tick().await;

    loop {
        interval.tick().await;

        let pending = state.pending.len().await;
        if pending >= config.warn_threshold {
            warn!(pending, "Pending invite backlog is high");
        } else {
            info!(pending, "Pending invite backlog");
        }
    }
}
