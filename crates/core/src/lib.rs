//! Resort Core Library
//!
//! Room inventory, customers, bookings and the booking service for the resort.

pub mod error;
pub mod invariants;
pub mod models;
pub mod registry;
pub mod service;

pub use error::{Error, Result};
pub use models::*;
pub use registry::{RoomRegistry, TypeAvailability};
pub use service::{BookingRequestOutcome, BookingService};
