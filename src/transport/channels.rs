//! Channel-backed collaborators
//!
//! Both implementations push onto an unbounded mpsc channel owned by
//! the host's writer task, so no engine path ever blocks on the wire.

use super::{InviteTransport, Notification, NotificationSink};
use crate::core::AppError;
use crate::dtos::InviteAction;
use crate::entities::Invite;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{info, warn};

pub struct ChannelTransport {
    actions: UnboundedSender<InviteAction>,
}

impl ChannelTransport {
    pub fn new(actions: UnboundedSender<InviteAction>) -> Self {
        Self { actions }
    }
}

impl InviteTransport for ChannelTransport {
    fn approve(&self, invite: &Invite) -> Result<(), AppError> {
        info!(group_id = invite.group_id, "Emitting approve action");
        self.actions
            .send(InviteAction::Approve {
                flag: invite.flag.clone(),
            })
            .map_err(|_| AppError::transport("Outbound action channel closed"))
    }

    fn reject(&self, invite: &Invite, reason: &str) -> Result<(), AppError> {
        info!(group_id = invite.group_id, "Emitting reject action");
        self.actions
            .send(InviteAction::Reject {
                flag: invite.flag.clone(),
                reason: reason.to_string(),
            })
            .map_err(|_| AppError::transport("Outbound action channel closed"))
    }
}

pub struct ChannelNotifier {
    messages: UnboundedSender<Notification>,
}

impl ChannelNotifier {
    pub fn new(messages: UnboundedSender<Notification>) -> Self {
        Self { messages }
    }
}

impl NotificationSink for ChannelNotifier {
    fn notify(&self, recipient: i64, text: String) {
        if let Err(e) = self.messages.send(Notification { recipient, text }) {
            warn!("Failed to deliver notification to {}: {:?}", recipient, e);
        }
    }
}
