//! Entities module - Domain entities of the approval engine
//!
//! Unlike the DTOs, these are the internal representation the queue and
//! the services operate on.

pub mod enums;
pub mod invite;

// Re-exports to ease imports
pub use enums::{InviteState, Resolution};
pub use invite::Invite;
