//! Application State - Shared state of the approval engine
//!
//! Owns the pending queue, the allow-list store and the collaborator
//! handles every service function works against.

use crate::config::Config;
use crate::core::AppError;
use crate::queue::PendingInviteQueue;
use crate::repositories::{AllowListBackend, AllowListStore};
use crate::transport::{InviteTransport, NotificationSink};
use std::sync::Arc;

/// Shared state threaded through every event handler and admin command
pub struct AppState {
    /// Policy values (timeout, reject reasons, superusers)
    pub config: Config,

    /// FIFO of invites awaiting an administrative decision
    pub pending: PendingInviteQueue,

    /// Groups pre-authorized for automatic approval
    pub allow_list: AllowListStore,

    /// Executes the protocol-level accept/decline
    pub transport: Arc<dyn InviteTransport>,

    /// Delivers administrator notifications
    pub notifier: Arc<dyn NotificationSink>,
}

impl AppState {
    /// Wires a new engine state: loads the allow-list through the given
    /// backend and starts with an empty pending queue.
    pub fn new(
        config: Config,
        backend: Arc<dyn AllowListBackend>,
        transport: Arc<dyn InviteTransport>,
        notifier: Arc<dyn NotificationSink>,
    ) -> Result<Self, AppError> {
        Ok(Self {
            config,
            pending: PendingInviteQueue::new(),
            allow_list: AllowListStore::new(backend)?,
            transport,
            notifier,
        })
    }
}
