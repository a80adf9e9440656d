//! Clan domain - clan membership and per-clan shared objects
//!
//! Architecture:
//!   HTTP route → actions::<operation>(caller, args, pool) → model statement
//!
//! Authorization (caller is an admin of the target's clan) is never a
//! separate read. It is part of the mutating statement's own condition, see
//! `kernel::gate`.

pub mod actions;
pub mod errors;
pub mod models;

pub use errors::ClanError;
pub use models::{Clan, ClanMembership, ClanObject, ClanRoster, MembershipType, RosterEntry};
