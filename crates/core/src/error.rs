//! Error types for Resort Core

use thiserror::Error;

use crate::models::{RoomId, RoomType};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Room {room_id} is not available.")]
    RoomUnavailable { room_id: RoomId },

    #[error("No available {0} rooms")]
    NoAvailableRoomOfType(RoomType),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
