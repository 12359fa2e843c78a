//! Enumerations - Enumerated types used by the invite entities

use serde::{Deserialize, Serialize};

/// Lifecycle state of an invite. Terminal once non-Pending.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InviteState {
    Pending,
    Approved,
    Rejected,
    TimedOut,
}

/// The two outcomes an administrator can apply to the queue head.
/// Timeouts are not an administrative resolution and stay out of this enum.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Approved,
    Rejected,
}

impl From<Resolution> for InviteState {
    fn from(value: Resolution) -> Self {
        match value {
            Resolution::Approved => InviteState::Approved,
            Resolution::Rejected => InviteState::Rejected,
        }
    }
}
