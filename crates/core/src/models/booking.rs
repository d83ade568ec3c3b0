//! Booking model - binds a room, a customer and a night count

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Customer, Room, RoomId, RoomType};
use crate::error::{Error, Result};
use crate::registry::RoomRegistry;

/// Identifier for a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingId(pub Uuid);

impl BookingId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BookingId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BookingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stay for one customer in one room.
///
/// The booking refers to its room by id; the [`RoomRegistry`] owns the room
/// and is handed in whenever the booking needs to change its availability.
///
/// Fields are fixed at construction; [`Booking::new`] is the only way in.
///
/// ```compile_fail
/// # use resort_core::{Booking, Customer, RoomRegistry, RoomId};
/// let registry = RoomRegistry::initialize();
/// let room = registry.get(RoomId(101)).unwrap();
/// let mut booking = Booking::new(room, Customer::new("A", "1").unwrap(), 2).unwrap();
/// booking.nights = 0;
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    id: BookingId,
    room_id: RoomId,
    room_type: RoomType,
    customer: Customer,
    nights: u32,
    booked_at: DateTime<Utc>,
}

/// What happened when a booking was confirmed or cancelled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    Confirmed {
        customer_name: String,
        room_id: RoomId,
    },
    /// The room could not be occupied; `reason` is the error message
    Rejected { room_id: RoomId, reason: String },
    Cancelled { room_id: RoomId },
}

impl BookingOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingOutcome::Confirmed { .. })
    }
}

impl std::fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingOutcome::Confirmed {
                customer_name,
                room_id,
            } => write!(f, "Booking confirmed for {} in Room {}", customer_name, room_id),
            BookingOutcome::Rejected { reason, .. } => write!(f, "{}", reason),
            BookingOutcome::Cancelled { room_id } => {
                write!(f, "Booking cancelled for Room {}", room_id)
            }
        }
    }
}

impl Booking {
    /// Create a booking for `room`. Nights must be at least one.
    pub fn new(room: &Room, customer: Customer, nights: u32) -> Result<Self> {
        if nights == 0 {
            return Err(Error::InvalidInput("nights must be a positive number".into()));
        }

        Ok(Self {
            id: BookingId::new(),
            room_id: room.id(),
            room_type: room.room_type(),
            customer,
            nights,
            booked_at: Utc::now(),
        })
    }

    pub fn id(&self) -> BookingId {
        self.id
    }

    pub fn room_id(&self) -> RoomId {
        self.room_id
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    pub fn nights(&self) -> u32 {
        self.nights
    }

    pub fn booked_at(&self) -> DateTime<Utc> {
        self.booked_at
    }

    pub fn price_per_night(&self) -> u64 {
        self.room_type.price_per_night()
    }

    pub fn total_cost(&self) -> u64 {
        self.price_per_night() * u64::from(self.nights)
    }

    /// Occupy the room. An already occupied room yields a rejection, not an error.
    pub fn confirm(&self, registry: &mut RoomRegistry) -> BookingOutcome {
        let result = match registry.get_mut(self.room_id) {
            Some(room) => room.book(),
            None => {
                // Bookings are built from registry rooms, so this is a wiring bug
                tracing::error!(
                    booking_id = %self.id,
                    room_id = %self.room_id,
                    "Booked room is missing from the registry"
                );
                Err(Error::NotFound(format!("Room {}", self.room_id)))
            }
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    booking_id = %self.id,
                    room_id = %self.room_id,
                    nights = self.nights,
                    total_cost = self.total_cost(),
                    "Booking confirmed"
                );
                BookingOutcome::Confirmed {
                    customer_name: self.customer.name().to_string(),
                    room_id: self.room_id,
                }
            }
            Err(e) => {
                tracing::warn!(
                    booking_id = %self.id,
                    room_id = %self.room_id,
                    error = %e,
                    "Booking rejected"
                );
                BookingOutcome::Rejected {
                    room_id: self.room_id,
                    reason: e.to_string(),
                }
            }
        }
    }

    /// Release the room. Always succeeds.
    pub fn cancel(&self, registry: &mut RoomRegistry) -> BookingOutcome {
        match registry.get_mut(self.room_id) {
            Some(room) => room.release(),
            None => tracing::warn!(room_id = %self.room_id, "Cancelled booking for unknown room"),
        }

        tracing::info!(booking_id = %self.id, room_id = %self.room_id, "Booking cancelled");
        BookingOutcome::Cancelled {
            room_id: self.room_id,
        }
    }
}
