//! Shared helpers for the integration suites

use invite_warden::config::Config;
use invite_warden::core::AppState;
use invite_warden::dtos::{GroupInviteEvent, InviteAction};
use invite_warden::repositories::MemoryBackend;
use invite_warden::transport::{ChannelNotifier, ChannelTransport, Notification};
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, unbounded_channel};

/// The administrator who receives every notification
pub const MASTER: i64 = 10000;

pub struct TestHarness {
    pub state: Arc<AppState>,
    pub actions: UnboundedReceiver<InviteAction>,
    pub notices: UnboundedReceiver<Notification>,
}

#[allow(dead_code)]
impl TestHarness {
    /// All protocol actions emitted so far
    pub fn drain_actions(&mut self) -> Vec<InviteAction> {
        let mut actions = Vec::new();
        while let Ok(action) = self.actions.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// All notification texts emitted so far
    pub fn drain_notices(&mut self) -> Vec<String> {
        let mut texts = Vec::new();
        while let Ok(notice) = self.notices.try_recv() {
            assert_eq!(notice.recipient, MASTER);
            texts.push(notice.text);
        }
        texts
    }
}

pub fn test_config(timeout_secs: u64) -> Config {
    Config {
        superusers: vec![MASTER],
        invite_timeout_secs: timeout_secs,
        allow_list_path: "allow_groups.json".to_string(),
        timeout_reject_reason: "Administrator approval timed out".to_string(),
        admin_reject_reason: "The administrator declined this group invite".to_string(),
    }
}

pub fn build_state(timeout_secs: u64, allowed: &[i64]) -> TestHarness {
    let (action_tx, actions) = unbounded_channel();
    let (notice_tx, notices) = unbounded_channel();

    let state = AppState::new(
        test_config(timeout_secs),
        Arc::new(MemoryBackend::with_groups(allowed.iter().copied())),
        Arc::new(ChannelTransport::new(action_tx)),
        Arc::new(ChannelNotifier::new(notice_tx)),
    )
    .expect("Failed to build test state");

    TestHarness {
        state: Arc::new(state),
        actions,
        notices,
    }
}

pub fn invite_event(group_id: i64, inviter_id: i64) -> GroupInviteEvent {
    GroupInviteEvent {
        group_id,
        inviter_id,
        flag: format!("flag-{group_id}"),
    }
}
