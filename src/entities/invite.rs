//! Invite entity - A group invitation awaiting a decision

use super::enums::InviteState;
use crate::dtos::GroupInviteEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Invite {
    /// Group asking the bot to join
    pub group_id: i64,
    /// User who sent the invite
    pub inviter_id: i64,
    /// Protocol token needed to answer the request
    pub flag: String,
    pub enqueued_at: DateTime<Utc>,
    pub state: InviteState,
}

impl Invite {
    /// Builds a fresh Pending invite from an incoming event.
    pub fn new(event: GroupInviteEvent) -> Self {
        Self {
            group_id: event.group_id,
            inviter_id: event.inviter_id,
            flag: event.flag,
            enqueued_at: Utc::now(),
            state: InviteState::Pending,
        }
    }
}
