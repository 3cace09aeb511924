//! Interrogation entity - An officer questioning a detainee in an interrogation room

use crate::domain::entities::{Detainee, DetaineeRef, Officer, OfficerRef, Room, RoomRef};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{InterrogationId, RoomType, ScheduledTime};

/// A scheduled interrogation. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interrogation {
    id: InterrogationId,
    officer: OfficerRef,
    detainee: DetaineeRef,
    room: RoomRef,
    scheduled_at: ScheduledTime,
}

impl Interrogation {
    /// The room must be an interrogation room
    pub fn new(
        officer: &Officer,
        detainee: &Detainee,
        room: &Room,
        scheduled_at: ScheduledTime,
    ) -> Result<Self, DomainError> {
        Self::restore(
            InterrogationId::new(),
            OfficerRef::from(officer),
            DetaineeRef::from(detainee),
            RoomRef::from(room),
            scheduled_at,
        )
    }

    /// Rebuild from stored references; the room type is checked again
    pub fn restore(
        id: InterrogationId,
        officer: OfficerRef,
        detainee: DetaineeRef,
        room: RoomRef,
        scheduled_at: ScheduledTime,
    ) -> Result<Self, DomainError> {
        room.require_type(RoomType::Interrogation)?;
        Ok(Self {
            id,
            officer,
            detainee,
            room,
            scheduled_at,
        })
    }

    pub fn id(&self) -> InterrogationId {
        self.id
    }

    pub fn officer(&self) -> &OfficerRef {
        &self.officer
    }

    pub fn detainee(&self) -> &DetaineeRef {
        &self.detainee
    }

    pub fn room(&self) -> &RoomRef {
        &self.room
    }

    pub fn scheduled_at(&self) -> ScheduledTime {
        self.scheduled_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{parse_scheduled_time, Rank};

    #[test]
    fn test_requires_interrogation_room() {
        let officer = Officer::new("Jane Doe", Rank::sergeant()).unwrap();
        let detainee = Detainee::new("Joe Bloggs", "Burglary").unwrap();
        let at = parse_scheduled_time("2024-01-01 10:00").unwrap();

        let meeting_room = Room::new(RoomType::Meeting);
        let result = Interrogation::new(&officer, &detainee, &meeting_room, at);
        assert!(matches!(
            result,
            Err(DomainError::RoomTypeMismatch {
                expected: RoomType::Interrogation,
                actual: RoomType::Meeting,
                ..
            })
        ));

        let room = Room::new(RoomType::Interrogation);
        let interrogation = Interrogation::new(&officer, &detainee, &room, at).unwrap();
        assert_eq!(interrogation.officer().id, officer.id());
        assert_eq!(interrogation.detainee().id, detainee.id());
        assert_eq!(interrogation.room().id, room.id());
        assert_eq!(interrogation.scheduled_at(), at);
    }
}
