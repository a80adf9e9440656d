//! Kernel module - store access primitives shared by the domains.

pub mod db;
pub mod gate;
pub mod transaction;

pub use transaction::in_transaction;
