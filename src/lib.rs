pub mod align;
pub mod clock;
pub mod config;
pub mod hand;
pub mod notify;
pub mod session;
pub mod target;
