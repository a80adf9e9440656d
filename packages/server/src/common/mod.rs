// Common types shared by the domains and the transport layer

pub mod auth;
pub mod entity_ids;
pub mod id;

pub use auth::{AuthError, AuthUser, Caller};
pub use entity_ids::*;
pub use id::Id;
