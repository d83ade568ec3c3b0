//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use crate::models::{Booking, Room};
use crate::registry::RoomRegistry;

/// Validate that a room is well-formed
pub fn assert_room_invariants(room: &Room) {
    // Room number 0 is never printed on a door
    debug_assert!(room.id().0 != 0, "Room with id 0 in inventory");
}

/// Validate the registry against the active bookings
pub fn assert_registry_invariants(registry: &RoomRegistry, active: &[Booking]) {
    let rooms: Vec<&Room> = registry.rooms().collect();

    // Room ids are unique
    for (i, room) in rooms.iter().enumerate() {
        debug_assert!(
            !rooms[..i].iter().any(|r| r.id() == room.id()),
            "Room {} registered twice",
            room.id()
        );
        assert_room_invariants(room);
    }

    // At most one active booking per room
    for (i, booking) in active.iter().enumerate() {
        debug_assert!(
            !active[..i].iter().any(|b| b.room_id() == booking.room_id()),
            "Room {} held by more than one active booking",
            booking.room_id()
        );
    }

    // Occupied iff some active booking holds the room
    for room in &rooms {
        let held = active.iter().any(|b| b.room_id() == room.id());
        debug_assert!(
            room.is_available() != held,
            "Room {} available={} but held={}",
            room.id(),
            room.is_available(),
            held
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Customer, RoomId, RoomType};

    #[test]
    fn test_fresh_registry_valid() {
        let registry = RoomRegistry::initialize();
        assert_registry_invariants(&registry, &[]);
    }

    #[test]
    fn test_booked_room_valid() {
        let mut registry = RoomRegistry::initialize();
        let customer = Customer::new("Lina", "1").unwrap();
        let booking = Booking::new(registry.get(RoomId(102)).unwrap(), customer, 2).unwrap();
        booking.confirm(&mut registry);

        assert_registry_invariants(&registry, &[booking]);
    }

    #[test]
    #[should_panic(expected = "available=false but held=false")]
    fn test_orphaned_occupied_room() {
        let mut registry = RoomRegistry::initialize();
        let customer = Customer::new("Lina", "1").unwrap();
        let booking = Booking::new(registry.get(RoomId(101)).unwrap(), customer, 1).unwrap();
        booking.confirm(&mut registry);

        assert_registry_invariants(&registry, &[]);
    }

    #[test]
    #[should_panic(expected = "Room with id 0")]
    fn test_zero_room_id() {
        assert_room_invariants(&Room::new(RoomId(0), RoomType::Standard));
    }

    #[test]
    #[should_panic(expected = "held by more than one active booking")]
    fn test_room_held_twice() {
        let mut registry = RoomRegistry::initialize();
        let room = registry.get(RoomId(101)).unwrap();
        let first = Booking::new(room, Customer::new("Lina", "1").unwrap(), 1).unwrap();
        let second = Booking::new(room, Customer::new("Omar", "2").unwrap(), 1).unwrap();
        first.confirm(&mut registry);

        assert_registry_invariants(&registry, &[first, second]);
    }
}
