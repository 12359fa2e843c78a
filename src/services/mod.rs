//! Services module - Coordinator for the engine's operations
//!
//! Split by caller: `invites` holds the event-side handler the host
//! registers with its dispatch, `admin` the command surface reserved
//! for the superuser.

pub mod admin;
pub mod invites;

// Re-exports to ease imports
pub use admin::{
    AdminCommand, allow_group, approve_oldest_invite, disallow_group, dispatch,
    reject_oldest_invite, report_pending_count,
};
pub use invites::handle_group_invite;
