//! Room model - a bookable unit in the resort inventory

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Room number as printed on the door (e.g. 101, 202)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub u32);

impl std::fmt::Display for RoomId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Room categories, listed in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomType {
    Standard,
    Deluxe,
}

impl RoomType {
    /// Fixed nightly rate for this type
    pub fn price_per_night(&self) -> u64 {
        match self {
            RoomType::Standard => 8000,
            RoomType::Deluxe => 12000,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RoomType::Standard => "Standard",
            RoomType::Deluxe => "Deluxe",
        }
    }

    /// Menu selector used by the console ("1", "2")
    pub fn selector(&self) -> u8 {
        match self {
            RoomType::Standard => 1,
            RoomType::Deluxe => 2,
        }
    }

    /// All room types in menu order
    pub fn all() -> &'static [RoomType] {
        &[RoomType::Standard, RoomType::Deluxe]
    }
}

impl std::fmt::Display for RoomType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for RoomType {
    type Err = Error;

    /// Accepts a type name (any case) or its menu selector
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        RoomType::all()
            .iter()
            .copied()
            .find(|t| {
                t.display_name().eq_ignore_ascii_case(s) || t.selector().to_string() == s
            })
            .ok_or_else(|| Error::InvalidInput(format!("unknown room type '{}'", s)))
    }
}

/// A single room and its availability flag
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    id: RoomId,
    room_type: RoomType,
    is_available: bool,
}

impl Room {
    /// New rooms start available
    pub fn new(id: RoomId, room_type: RoomType) -> Self {
        Self {
            id,
            room_type,
            is_available: true,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn price_per_night(&self) -> u64 {
        self.room_type.price_per_night()
    }

    pub fn is_available(&self) -> bool {
        self.is_available
    }

    /// Mark the room occupied.
    ///
    /// Fails with [`Error::RoomUnavailable`] and leaves the flag untouched if the
    /// room is already occupied.
    pub fn book(&mut self) -> Result<()> {
        if !self.is_available {
            tracing::debug!(room_id = %self.id, "Rejected booking of occupied room");
            return Err(Error::RoomUnavailable { room_id: self.id });
        }
        self.is_available = false;
        tracing::debug!(room_id = %self.id, "Room occupied");
        Ok(())
    }

    /// Mark the room available again. Releasing a free room is a no-op.
    pub fn release(&mut self) {
        self.is_available = true;
        tracing::debug!(room_id = %self.id, "Room released");
    }
}
