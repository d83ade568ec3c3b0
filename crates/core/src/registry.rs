//! Room registry - the fixed room inventory
//!
//! The registry owns every room for the lifetime of the process and answers
//! availability queries. Rooms keep their registration order, which is the
//! tie-break for "first available".

use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{Room, RoomId, RoomType};

/// Free/total room counts for one room type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TypeAvailability {
    pub room_type: RoomType,
    pub available: usize,
    pub total: usize,
}

/// Room registry - central store of all rooms
#[derive(Debug, Default)]
pub struct RoomRegistry {
    /// Rooms in registration order
    rooms: Vec<Room>,
}

impl RoomRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self { rooms: Vec::new() }
    }

    /// Create the resort's standard inventory: Standard 101, 102 and Deluxe 201, 202
    pub fn initialize() -> Self {
        let mut registry = Self::new();
        for (id, room_type) in [
            (101, RoomType::Standard),
            (102, RoomType::Standard),
            (201, RoomType::Deluxe),
            (202, RoomType::Deluxe),
        ] {
            registry.rooms.push(Room::new(RoomId(id), room_type));
        }

        tracing::info!(rooms = registry.len(), "Room inventory initialized");
        registry
    }

    /// First free room of `room_type` in registration order
    pub fn find_available_room(&self, room_type: RoomType) -> Option<&Room> {
        self.rooms
            .iter()
            .find(|r| r.room_type() == room_type && r.is_available())
    }

    /// Like [`find_available_room`](Self::find_available_room), but reports a
    /// missing room as [`Error::NoAvailableRoomOfType`]
    pub fn require_available_room(&self, room_type: RoomType) -> Result<&Room> {
        self.find_available_room(room_type)
            .ok_or(Error::NoAvailableRoomOfType(room_type))
    }

    /// Get a room by id
    pub fn get(&self, room_id: RoomId) -> Option<&Room> {
        self.rooms.iter().find(|r| r.id() == room_id)
    }

    /// Availability changes go through [`Booking`](crate::Booking)
    pub(crate) fn get_mut(&mut self, room_id: RoomId) -> Option<&mut Room> {
        self.rooms.iter_mut().find(|r| r.id() == room_id)
    }

    /// All rooms in registration order
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.iter()
    }

    /// Get number of registered rooms
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    /// Check if registry is empty
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// True if at least one room of any type is free
    pub fn has_any_available(&self) -> bool {
        self.rooms.iter().any(|r| r.is_available())
    }

    /// Per-type counts, in menu order
    pub fn availability(&self) -> Vec<TypeAvailability> {
        RoomType::all()
            .iter()
            .map(|&room_type| {
                let of_type = self.rooms.iter().filter(|r| r.room_type() == room_type);
                TypeAvailability {
                    room_type,
                    available: of_type.clone().filter(|r| r.is_available()).count(),
                    total: of_type.count(),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn occupy(registry: &mut RoomRegistry, id: u32) {
        registry.get_mut(RoomId(id)).unwrap().book().unwrap();
    }

    #[test]
    fn test_initialized_inventory() {
        let registry = RoomRegistry::initialize();
        assert_eq!(registry.len(), 4);

        let rooms: Vec<_> = registry
            .rooms()
            .map(|r| (r.id().0, r.room_type(), r.is_available()))
            .collect();
        assert_eq!(
            rooms,
            vec![
                (101, RoomType::Standard, true),
                (102, RoomType::Standard, true),
                (201, RoomType::Deluxe, true),
                (202, RoomType::Deluxe, true),
            ]
        );
    }

    #[test]
    fn test_prices_follow_type() {
        let registry = RoomRegistry::initialize();
        for room in registry.rooms() {
            let expected = match room.room_type() {
                RoomType::Standard => 8000,
                RoomType::Deluxe => 12000,
            };
            assert_eq!(room.price_per_night(), expected);
        }
    }

    #[test]
    fn test_find_uses_registration_order() {
        let mut registry = RoomRegistry::initialize();
        assert_eq!(
            registry.find_available_room(RoomType::Standard).unwrap().id(),
            RoomId(101)
        );

        occupy(&mut registry, 101);
        assert_eq!(
            registry.find_available_room(RoomType::Standard).unwrap().id(),
            RoomId(102)
        );
    }

    #[test]
    fn test_find_none_when_type_exhausted() {
        let mut registry = RoomRegistry::initialize();
        occupy(&mut registry, 101);
        occupy(&mut registry, 102);

        assert!(registry.find_available_room(RoomType::Standard).is_none());
        assert_eq!(
            registry.require_available_room(RoomType::Standard).unwrap_err(),
            Error::NoAvailableRoomOfType(RoomType::Standard)
        );
        assert_eq!(
            registry.find_available_room(RoomType::Deluxe).unwrap().id(),
            RoomId(201)
        );
    }

    #[test]
    fn test_released_room_found_again() {
        let mut registry = RoomRegistry::initialize();
        occupy(&mut registry, 201);
        assert_eq!(
            registry.find_available_room(RoomType::Deluxe).unwrap().id(),
            RoomId(202)
        );

        registry.get_mut(RoomId(201)).unwrap().release();
        assert_eq!(
            registry.find_available_room(RoomType::Deluxe).unwrap().id(),
            RoomId(201)
        );
    }

    #[test]
    fn test_empty_registry() {
        let registry = RoomRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.has_any_available());
        assert!(registry.find_available_room(RoomType::Deluxe).is_none());
    }

    #[test]
    fn test_availability_counts() {
        let mut registry = RoomRegistry::initialize();
        occupy(&mut registry, 202);

        let counts = registry.availability();
        assert_eq!(
            counts,
            vec![
                TypeAvailability {
                    room_type: RoomType::Standard,
                    available: 2,
                    total: 2,
                },
                TypeAvailability {
                    room_type: RoomType::Deluxe,
                    available: 1,
                    total: 2,
                },
            ]
        );
    }
}
