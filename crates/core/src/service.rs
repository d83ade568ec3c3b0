//! Booking service - the entry point used by the console
//!
//! Finds a free room of the requested type, creates and confirms the booking,
//! and keeps the ledger of active bookings so they can be cancelled later.

use tracing::instrument;

use crate::error::{Error, Result};
use crate::invariants::assert_registry_invariants;
use crate::models::{Booking, BookingId, BookingOutcome, Customer, Room, RoomId, RoomType};
use crate::registry::RoomRegistry;

/// Result of a booking request
#[derive(Debug, Clone)]
pub enum BookingRequestOutcome {
    /// The room is now held by `booking`
    Confirmed { booking: Booking, total_cost: u64 },
    /// The chosen room could not be occupied
    Rejected {
        room_id: RoomId,
        reason: String,
        total_cost: u64,
    },
    /// No free room of this type; the caller decides what to try next
    NoAvailability(RoomType),
}

impl BookingRequestOutcome {
    pub fn is_confirmed(&self) -> bool {
        matches!(self, BookingRequestOutcome::Confirmed { .. })
    }

    /// Cost to display to the customer, if a room was chosen
    pub fn total_cost(&self) -> Option<u64> {
        match self {
            BookingRequestOutcome::Confirmed { total_cost, .. }
            | BookingRequestOutcome::Rejected { total_cost, .. } => Some(*total_cost),
            BookingRequestOutcome::NoAvailability(_) => None,
        }
    }
}

/// Orchestrates bookings against a room registry it owns
#[derive(Debug)]
pub struct BookingService {
    registry: RoomRegistry,
    /// Confirmed, not yet cancelled bookings
    bookings: Vec<Booking>,
}

impl BookingService {
    pub fn new(registry: RoomRegistry) -> Self {
        Self {
            registry,
            bookings: Vec::new(),
        }
    }

    /// Service over the resort's standard four-room inventory
    pub fn with_default_inventory() -> Self {
        Self::new(RoomRegistry::initialize())
    }

    pub fn registry(&self) -> &RoomRegistry {
        &self.registry
    }

    pub fn find_available_room(&self, room_type: RoomType) -> Option<&Room> {
        self.registry.find_available_room(room_type)
    }

    /// Book the first free room of `room_type` for `nights` nights.
    ///
    /// A blank name or zero nights is an [`Error::InvalidInput`]. Running out of
    /// rooms is a normal outcome, not an error.
    #[instrument(skip(self, customer_name, contact))]
    pub fn request_booking(
        &mut self,
        customer_name: &str,
        contact: &str,
        room_type: RoomType,
        nights: u32,
    ) -> Result<BookingRequestOutcome> {
        let customer = Customer::new(customer_name, contact)?;

        let booking = match self.registry.require_available_room(room_type) {
            Ok(room) => Booking::new(room, customer, nights)?,
            Err(Error::NoAvailableRoomOfType(room_type)) => {
                tracing::info!("No available room of requested type");
                return Ok(BookingRequestOutcome::NoAvailability(room_type));
            }
            Err(e) => return Err(e),
        };

        let total_cost = booking.total_cost();
        let outcome = match booking.confirm(&mut self.registry) {
            BookingOutcome::Rejected { room_id, reason } => BookingRequestOutcome::Rejected {
                room_id,
                reason,
                total_cost,
            },
            _ => {
                self.bookings.push(booking.clone());
                BookingRequestOutcome::Confirmed {
                    booking,
                    total_cost,
                }
            }
        };

        assert_registry_invariants(&self.registry, &self.bookings);
        Ok(outcome)
    }

    /// Cancel an active booking and free its room
    #[instrument(skip(self))]
    pub fn cancel_booking(&mut self, booking_id: BookingId) -> Result<BookingOutcome> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.id() == booking_id)
            .ok_or_else(|| Error::NotFound(format!("Booking {}", booking_id)))?;

        let booking = self.bookings.remove(index);
        let outcome = booking.cancel(&mut self.registry);

        assert_registry_invariants(&self.registry, &self.bookings);
        Ok(outcome)
    }

    /// Get an active booking by id
    pub fn booking(&self, booking_id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id() == booking_id)
    }

    /// Active bookings in the order they were confirmed
    pub fn active_bookings(&self) -> &[Booking] {
        &self.bookings
    }
}

impl Default for BookingService {
    fn default() -> Self {
        Self::with_default_inventory()
    }
}
