//! invite-warden - Group-invite approval engine for a chat-bot host
//!
//! Intercepts group-invitation events, queues them for administrator
//! approval and auto-rejects them after a timeout. The host registers
//! `services::handle_group_invite` with its event dispatch, routes
//! parsed superuser commands into `services::dispatch`, and drains the
//! outbound action/notification channels from its session writer.

pub mod config;
pub mod core;
pub mod dtos;
pub mod entities;
pub mod monitoring;
pub mod queue;
pub mod repositories;
pub mod services;
pub mod transport;

// Re-exports of the main types to ease imports
pub use crate::config::Config;
pub use crate::core::{AppError, AppState, init_tracing};
pub use crate::queue::{InviteId, PendingInviteQueue};
