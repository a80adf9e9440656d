// Clan Membership Service - API Core
//
// Clan creation, join/leave, admin promotion, pending-member approval and
// per-clan shared objects, backed by PostgreSQL.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
