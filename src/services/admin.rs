//! Admin services - Administrative command surface of the engine
//!
//! The host parses its own command syntax and hands the result here as
//! an `AdminCommand`. Replies travel back through the notification
//! sink; `dispatch` guarantees no error escapes to the host's event
//! loop.

use crate::core::{AppError, AppState};
use crate::entities::Resolution;
use lazy_static::lazy_static;
use regex::Regex;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

lazy_static! {
    /// Group-id arguments must be a pure digit sequence
    static ref GROUP_ID_PATTERN: Regex = Regex::new("^[0-9]+$").unwrap();
}

const MALFORMED_GROUP_ID: &str = "Malformed group id: digits only";
const NO_PENDING_INVITES: &str = "No pending group invites";

/// The command set available to the superuser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminCommand {
    ApproveOldest,
    RejectOldest,
    PendingCount,
    AllowAdd(String),
    AllowRemove(String),
}

/// Routes a parsed command to its handler and converts any residual
/// error into notification text for the administrator.
#[instrument(skip(state))]
pub async fn dispatch(state: &Arc<AppState>, command: AdminCommand) {
    let result = match command {
        AdminCommand::ApproveOldest => {
            approve_oldest_invite(state).await;
            Ok(())
        }
        AdminCommand::RejectOldest => {
            reject_oldest_invite(state).await;
            Ok(())
        }
        AdminCommand::PendingCount => {
            report_pending_count(state).await;
            Ok(())
        }
        AdminCommand::AllowAdd(arg) => allow_group(state, &arg).await,
        AdminCommand::AllowRemove(arg) => disallow_group(state, &arg).await,
    };

    if let Err(e) = result {
        error!("Admin command failed: {}", e);
        state
            .notifier
            .notify(state.config.master(), format!("Command failed: {}", e));
    }
}

/// Approves the oldest still-pending invite, if any.
#[instrument(skip(state))]
pub async fn approve_oldest_invite(state: &Arc<AppState>) {
    let master = state.config.master();
    match state.pending.resolve_front(Resolution::Approved).await {
        Some(invite) => {
            info!("Approved the invite from group {}", invite.group_id);
            if let Err(e) = state.transport.approve(&invite) {
                warn!("Approve action failed: {}", e);
            }
            state.notifier.notify(
                master,
                format!("Approved the invite from group {}", invite.group_id),
            );
        }
        None => {
            info!("No pending invites to approve");
            state.notifier.notify(master, NO_PENDING_INVITES.to_string());
        }
    }
}

/// Rejects the oldest still-pending invite, if any.
#[instrument(skip(state))]
pub async fn reject_oldest_invite(state: &Arc<AppState>) {
    let master = state.config.master();
    match state.pending.resolve_front(Resolution::Rejected).await {
        Some(invite) => {
            warn!("Rejected the invite from group {}", invite.group_id);
            if let Err(e) = state
                .transport
                .reject(&invite, &state.config.admin_reject_reason)
            {
                warn!("Reject action failed: {}", e);
            }
            state.notifier.notify(
                master,
                format!("Rejected the invite from group {}", invite.group_id),
            );
        }
        None => {
            info!("No pending invites to reject");
            state.notifier.notify(master, NO_PENDING_INVITES.to_string());
        }
    }
}

/// Reports how many invites are awaiting a decision.
#[instrument(skip(state))]
pub async fn report_pending_count(state: &Arc<AppState>) {
    let pending = state.pending.len().await;
    state
        .notifier
        .notify(state.config.master(), format!("Pending group invites: {}", pending));
}

/// Adds a group to the allow-list. Malformed input and duplicates are
/// reported to the administrator without touching the store.
#[instrument(skip(state))]
pub async fn allow_group(state: &Arc<AppState>, arg: &str) -> Result<(), AppError> {
    let master = state.config.master();
    let group_id = match parse_group_id(arg) {
        Ok(id) => id,
        Err(e) => {
            warn!("Rejected allow-list argument {:?}: {}", arg, e);
            state.notifier.notify(master, MALFORMED_GROUP_ID.to_string());
            return Ok(());
        }
    };

    if state.allow_list.add(group_id).await? {
        info!("Group {} added to the allow-list", group_id);
        state
            .notifier
            .notify(master, format!("Group {} added to the allow-list", group_id));
    } else {
        state.notifier.notify(
            master,
            format!("Group {} is already in the allow-list", group_id),
        );
    }
    Ok(())
}

/// Removes a group from the allow-list, reporting absent ids as a
/// no-op.
#[instrument(skip(state))]
pub async fn disallow_group(state: &Arc<AppState>, arg: &str) -> Result<(), AppError> {
    let master = state.config.master();
    let group_id = match parse_group_id(arg) {
        Ok(id) => id,
        Err(e) => {
            warn!("Rejected allow-list argument {:?}: {}", arg, e);
            state.notifier.notify(master, MALFORMED_GROUP_ID.to_string());
            return Ok(());
        }
    };

    if state.allow_list.remove(group_id).await? {
        info!("Group {} removed from the allow-list", group_id);
        state.notifier.notify(
            master,
            format!("Group {} removed from the allow-list", group_id),
        );
    } else {
        state.notifier.notify(
            master,
            format!("Group {} is not in the allow-list", group_id),
        );
    }
    Ok(())
}

fn parse_group_id(arg: &str) -> Result<i64, AppError> {
    let trimmed = arg.trim();
    if !GROUP_ID_PATTERN.is_match(trimmed) {
        return Err(AppError::validation("Group id must be digits only"));
    }
    trimmed
        .parse::<i64>()
        .map_err(|_| AppError::validation("Group id out of range"))
}
