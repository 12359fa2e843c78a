//! Action DTOs - Outbound protocol actions toward the bot session

use serde::{Deserialize, Serialize};

/// The decision the engine asks the host session to execute. The
/// channel transport emits these; the host's writer task translates
/// them into the actual protocol calls.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum InviteAction {
    Approve { flag: String },
    Reject { flag: String, reason: String },
}
