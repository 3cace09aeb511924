//! Room entity - A bookable room with a fixed type

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{RoomId, RoomType};

/// A room that can host one activity at a time
///
/// State machine: `Available --book--> Booked`, `any --release--> Available`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    id: RoomId,
    room_type: RoomType,
    available: bool,
}

impl Room {
    /// Create a new, available room
    pub fn new(room_type: RoomType) -> Self {
        Self {
            id: RoomId::new(),
            room_type,
            available: true,
        }
    }

    /// Rebuild a room from stored state
    pub fn restore(id: RoomId, room_type: RoomType, available: bool) -> Self {
        Self {
            id,
            room_type,
            available,
        }
    }

    pub fn id(&self) -> RoomId {
        self.id
    }

    pub fn room_type(&self) -> RoomType {
        self.room_type
    }

    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn is_booked(&self) -> bool {
        !self.available
    }

    /// Book the room. Fails without changing anything if it is already booked.
    pub fn book(&mut self) -> Result<(), DomainError> {
        if !self.available {
            return Err(DomainError::invalid_transition(format!(
                "Room {} is already booked",
                self.id
            )));
        }
        self.available = false;
        Ok(())
    }

    /// Release the room. Always succeeds.
    pub fn release(&mut self) {
        self.available = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_room_is_available() {
        let room = Room::new(RoomType::Meeting);
        assert!(room.is_available());
        assert_eq!(room.room_type(), RoomType::Meeting);
    }

    #[test]
    fn test_double_booking_fails_and_keeps_state() {
        let mut room = Room::new(RoomType::Interrogation);
        room.book().unwrap();

        let result = room.book();

        assert!(matches!(result, Err(DomainError::InvalidTransition(_))));
        assert!(room.is_booked());
    }

    #[test]
    fn test_release_is_idempotent() {
        let mut room = Room::new(RoomType::Production);
        room.release();
        assert!(room.is_available());

        room.book().unwrap();
        room.release();
        room.release();
        assert!(room.is_available());
        assert!(room.book().is_ok());
    }

    fn room_type_strategy() -> impl Strategy<Value = RoomType> {
        prop::sample::select(RoomType::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn prop_second_book_always_fails(room_type in room_type_strategy(), available in any::<bool>()) {
            let mut room = Room::restore(RoomId::new(), room_type, available);
            let _ = room.book();
            let before = room.clone();

            prop_assert!(room.book().is_err());
            prop_assert_eq!(room, before);
        }
    }
}
