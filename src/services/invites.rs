//! Invite services - Event-side half of the approval engine
//!
//! `handle_group_invite` is the function a host registers with its
//! event dispatch for group-invitation requests. Every invite that is
//! not auto-approved lands in the pending queue with its own timer.

use crate::core::AppState;
use crate::dtos::GroupInviteEvent;
use crate::entities::{Invite, InviteState};
use crate::queue::InviteId;
use std::sync::Arc;
use tokio::time::{Duration, sleep};
use tracing::{info, instrument, warn};

/// Command hints quoted in the administrator prompt
pub const APPROVE_COMMAND: &str = "approve-oldest";
pub const REJECT_COMMAND: &str = "reject-oldest";

#[instrument(skip(state, event), fields(group_id = event.group_id, inviter_id = event.inviter_id))]
pub async fn handle_group_invite(state: &Arc<AppState>, event: GroupInviteEvent) {
    info!(
        "Invited by user {} to join group {}",
        event.inviter_id, event.group_id
    );

    if state.config.is_superuser(event.inviter_id) {
        info!("Auto-approved: superuser invite");
        approve_immediately(state, event);
        return;
    }

    if state.allow_list.contains(event.group_id).await {
        info!("Auto-approved: group in allow-list");
        approve_immediately(state, event);
        return;
    }

    let invite = Invite::new(event);
    let timeout = Duration::from_secs(state.config.invite_timeout_secs);

    state.notifier.notify(
        state.config.master(),
        format!(
            "Invited by user {} to join group {}\nReply \"{}\" to accept or \"{}\" to decline",
            invite.inviter_id, invite.group_id, APPROVE_COMMAND, REJECT_COMMAND
        ),
    );

    info!(
        "Will auto-reject the invite from group {} in {} seconds",
        invite.group_id,
        timeout.as_secs()
    );

    state
        .pending
        .enqueue(invite, |id| {
            let state = Arc::clone(state);
            tokio::spawn(auto_reject_after(state, id, timeout)).abort_handle()
        })
        .await;
}

fn approve_immediately(state: &Arc<AppState>, event: GroupInviteEvent) {
    let mut invite = Invite::new(event);
    invite.state = InviteState::Approved;
    if let Err(e) = state.transport.approve(&invite) {
        warn!("Approve action failed: {}", e);
    }
}

/// Timer body armed for each enqueued invite. Claiming the entry via
/// `remove` decides the race against a concurrent administrative
/// resolve; after a successful claim the path below holds no await
/// point, so a late abort cannot land mid-resolution.
async fn auto_reject_after(state: Arc<AppState>, id: InviteId, timeout: Duration) {
    sleep(timeout).await;

    let Some(mut invite) = state.pending.remove(id).await else {
        // Already resolved by an administrator
        return;
    };
    invite.state = InviteState::TimedOut;

    warn!(
        "Approval timed out, auto-rejecting the invite from group {}",
        invite.group_id
    );
    if let Err(e) = state
        .transport
        .reject(&invite, &state.config.timeout_reject_reason)
    {
        warn!("Reject action failed: {}", e);
    }
    state.notifier.notify(
        state.config.master(),
        format!(
            "The invite from group {} timed out and was auto-rejected",
            invite.group_id
        ),
    );
}
