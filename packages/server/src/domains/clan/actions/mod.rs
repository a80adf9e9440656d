//! Clan operations - the surface exposed to the transport
//!
//! Every operation takes the caller context first. Unauthenticated callers
//! get `Err(AuthError::AuthenticationRequired)` before any statement runs;
//! every store-level failure is logged and reported as `false`, `None` or an
//! empty list.

mod membership;
mod objects;
mod queries;

pub use membership::{create, join, leave, set_admin, set_member_type};
pub use objects::{get_object, set_object};
pub use queries::{list, members};
