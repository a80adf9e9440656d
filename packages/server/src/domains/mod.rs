pub mod auth;
pub mod clan;
pub mod member;
