// HTTP routes
pub mod clan;
pub mod health;

pub use clan::*;
pub use health::*;
