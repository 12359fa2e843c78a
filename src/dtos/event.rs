//! Event DTOs - Payloads handed in by the hosting bot framework

use serde::{Deserialize, Serialize};

/// A request.group.invite event as dispatched by the host: a group is
/// asking the bot to join on behalf of `inviter_id`. The `flag` is the
/// opaque token the protocol requires to answer the request later.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GroupInviteEvent {
    pub group_id: i64,
    pub inviter_id: i64,
    pub flag: String,
}
