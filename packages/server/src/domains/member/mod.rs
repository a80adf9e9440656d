//! Member domain - read access to member accounts

pub mod models;

pub use models::member::Member;
