//! PendingInviteQueue - FIFO of invites awaiting a human decision
//!
//! One lock guards the whole queue; removing an entry under that lock
//! is the linearization point of resolution. Whoever removes the entry
//! (administrator or the invite's own timer) owns the terminal
//! transition; the loser of the race observes the entry gone and does
//! nothing.

use crate::entities::{Invite, Resolution};
use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::debug;

/// Opaque ticket identifying a queue entry, handed back at enqueue time
/// and used by the entry's timer to claim it later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InviteId(u64);

impl fmt::Display for InviteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

struct PendingEntry {
    id: InviteId,
    invite: Invite,
    /// Exclusively owned cancellation handle of this entry's timer task
    timer: AbortHandle,
}

pub struct PendingInviteQueue {
    entries: Mutex<VecDeque<PendingEntry>>,
    next_id: AtomicU64,
}

impl PendingInviteQueue {
    pub fn new() -> Self {
        Self {
            entries: Mutex::new(VecDeque::new()),
            next_id: AtomicU64::new(0),
        }
    }

    /// Appends an invite to the tail and arms its timeout.
    ///
    /// `arm_timer` runs while the queue lock is held: the timer task it
    /// spawns cannot claim its entry before the insertion is visible,
    /// however short the timeout.
    pub async fn enqueue<F>(&self, invite: Invite, arm_timer: F) -> InviteId
    where
        F: FnOnce(InviteId) -> AbortHandle,
    {
        let mut entries = self.entries.lock().await;
        let id = InviteId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let timer = arm_timer(id);
        entries.push_back(PendingEntry { id, invite, timer });
        debug!(invite_id = %id, pending = entries.len(), "Invite enqueued");
        id
    }

    /// Pops the oldest pending invite, cancels its timer and stamps the
    /// given outcome. `None` means the queue was empty, a normal
    /// outcome the caller reports as "nothing to process".
    pub async fn resolve_front(&self, outcome: Resolution) -> Option<Invite> {
        let mut entries = self.entries.lock().await;
        let entry = entries.pop_front()?;
        entry.timer.abort();
        let mut invite = entry.invite;
        invite.state = outcome.into();
        debug!(invite_id = %entry.id, pending = entries.len(), "Invite resolved from front");
        Some(invite)
    }

    /// Claims an entry from wherever it sits in the queue. `None` means
    /// it was already resolved; the caller must then do nothing, which
    /// is what makes a timeout racing an administrator idempotent.
    pub async fn remove(&self, id: InviteId) -> Option<Invite> {
        let mut entries = self.entries.lock().await;
        let position = entries.iter().position(|entry| entry.id == id)?;
        let entry = entries.remove(position)?;
        entry.timer.abort();
        debug!(invite_id = %id, pending = entries.len(), "Invite removed");
        Some(entry.invite)
    }

    /// Count of invites still awaiting a decision
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for PendingInviteQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dtos::GroupInviteEvent;
    use crate::entities::InviteState;
    use std::sync::Arc;
    use std::sync::atomic::AtomicBool;
    use tokio::time::{Duration, sleep};

    fn make_invite(group_id: i64) -> Invite {
        Invite::new(GroupInviteEvent {
            group_id,
            inviter_id: 1,
            flag: format!("flag-{group_id}"),
        })
    }

    /// A timer handle detached from any real deadline
    fn idle_timer() -> AbortHandle {
        tokio::spawn(std::future::pending::<()>()).abort_handle()
    }

    #[tokio::test]
    async fn resolve_front_returns_oldest_first() {
        let queue = PendingInviteQueue::new();
        for group_id in [100, 200, 300] {
            queue.enqueue(make_invite(group_id), |_| idle_timer()).await;
        }

        let resolved = queue.resolve_front(Resolution::Approved).await.unwrap();
        assert_eq!(resolved.group_id, 100);
        assert_eq!(resolved.state, InviteState::Approved);
        assert_eq!(queue.len().await, 2);

        let resolved = queue.resolve_front(Resolution::Rejected).await.unwrap();
        assert_eq!(resolved.group_id, 200);
        assert_eq!(resolved.state, InviteState::Rejected);
    }

    #[tokio::test]
    async fn resolve_front_on_empty_queue_is_none() {
        let queue = PendingInviteQueue::new();
        assert!(queue.resolve_front(Resolution::Approved).await.is_none());
    }

    #[tokio::test]
    async fn remove_claims_an_entry_exactly_once() {
        let queue = PendingInviteQueue::new();
        let id = queue.enqueue(make_invite(500), |_| idle_timer()).await;

        assert!(queue.remove(id).await.is_some());
        assert!(queue.remove(id).await.is_none());
        assert!(queue.is_empty().await);
    }

    #[tokio::test]
    async fn remove_reaches_entries_behind_the_head() {
        let queue = PendingInviteQueue::new();
        queue.enqueue(make_invite(100), |_| idle_timer()).await;
        let middle = queue.enqueue(make_invite(200), |_| idle_timer()).await;
        queue.enqueue(make_invite(300), |_| idle_timer()).await;

        let removed = queue.remove(middle).await.unwrap();
        assert_eq!(removed.group_id, 200);

        // FIFO order of the survivors is untouched
        let head = queue.resolve_front(Resolution::Approved).await.unwrap();
        assert_eq!(head.group_id, 100);
        let next = queue.resolve_front(Resolution::Approved).await.unwrap();
        assert_eq!(next.group_id, 300);
    }

    #[tokio::test(start_paused = true)]
    async fn resolve_front_cancels_the_armed_timer() {
        let queue = PendingInviteQueue::new();
        let fired = Arc::new(AtomicBool::new(false));

        let fired_clone = Arc::clone(&fired);
        queue
            .enqueue(make_invite(700), move |_| {
                tokio::spawn(async move {
                    sleep(Duration::from_secs(1)).await;
                    fired_clone.store(true, Ordering::SeqCst);
                })
                .abort_handle()
            })
            .await;

        assert!(queue.resolve_front(Resolution::Approved).await.is_some());

        // Well past the deadline: an aborted timer must never fire
        sleep(Duration::from_secs(5)).await;
        assert!(!fired.load(Ordering::SeqCst));
    }
}
