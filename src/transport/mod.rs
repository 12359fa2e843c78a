//! Transport Module - Seams toward the hosting bot session
//!
//! The engine never talks to the wire itself. It emits protocol
//! decisions through `InviteTransport` and administrator messages
//! through `NotificationSink`; the host wires both to its own session.
//! Channel-backed implementations are provided for hosts that drain
//! outbound traffic from a writer task.

pub mod channels;

// Re-exports to ease imports
pub use channels::{ChannelNotifier, ChannelTransport};

use crate::core::AppError;
use crate::entities::Invite;

/// Executes the protocol-level accept/decline of an invite.
///
/// A failure here is surfaced as a warning by the caller and never
/// rolls back queue state: the decision is final once the entry left
/// the queue.
pub trait InviteTransport: Send + Sync {
    fn approve(&self, invite: &Invite) -> Result<(), AppError>;
    fn reject(&self, invite: &Invite, reason: &str) -> Result<(), AppError>;
}

/// Fire-and-forget delivery of a private message to an administrator.
/// Implementations log delivery failures; the engine never retries.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, recipient: i64, text: String);
}

/// A private message addressed to an administrator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub recipient: i64,
    pub text: String,
}
