//! Data models for the resort

mod booking;
mod customer;
mod room;

pub use booking::*;
pub use customer::*;
pub use room::*;
