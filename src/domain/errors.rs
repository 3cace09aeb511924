//! Domain errors - Invariant violations raised by entities and value objects

use thiserror::Error;

use crate::domain::value_objects::{RoomId, RoomType};

/// Errors raised when a domain invariant would be broken
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A state change was requested in the wrong direction
    /// (booking a booked room, promoting to a lower rank, ...)
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// An activity was built around a room of the wrong type
    #[error("Room {room_id} has type {actual}, expected {expected}")]
    RoomTypeMismatch {
        room_id: RoomId,
        expected: RoomType,
        actual: RoomType,
    },

    /// Malformed input (empty names, unparseable times, ...)
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn invalid_transition(message: impl Into<String>) -> Self {
        Self::InvalidTransition(message.into())
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
