//! Meeting entity - An officer meeting an informant in a meeting room

use crate::domain::entities::{Officer, OfficerRef, Room, RoomRef};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{MeetingId, RoomType, ScheduledTime};

/// A scheduled meeting with an informant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    id: MeetingId,
    officer: OfficerRef,
    informant_name: String,
    room: RoomRef,
    scheduled_at: ScheduledTime,
}

impl Meeting {
    pub fn new(
        officer: &Officer,
        informant_name: impl Into<String>,
        room: &Room,
        scheduled_at: ScheduledTime,
    ) -> Result<Self, DomainError> {
        Self::restore(
            MeetingId::new(),
            OfficerRef::from(officer),
            informant_name,
            RoomRef::from(room),
            scheduled_at,
        )
    }

    pub fn restore(
        id: MeetingId,
        officer: OfficerRef,
        informant_name: impl Into<String>,
        room: RoomRef,
        scheduled_at: ScheduledTime,
    ) -> Result<Self, DomainError> {
        room.require_type(RoomType::Meeting)?;
        let informant_name = informant_name.into();
        if informant_name.trim().is_empty() {
            return Err(DomainError::validation("Informant name cannot be empty"));
        }
        Ok(Self {
            id,
            officer,
            informant_name,
            room,
            scheduled_at,
        })
    }

    pub fn id(&self) -> MeetingId {
        self.id
    }

    pub fn officer(&self) -> &OfficerRef {
        &self.officer
    }

    pub fn informant_name(&self) -> &str {
        &self.informant_name
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
    fn test_requires_meeting_room_and_informant() {
        let officer = Officer::new("John Smith", Rank::officer()).unwrap();
        let at = parse_scheduled_time("2024-02-10 09:30").unwrap();

        let production = Room::new(RoomType::Production);
        assert!(Meeting::new(&officer, "Snitch", &production, at).is_err());

        let room = Room::new(RoomType::Meeting);
        assert!(matches!(
            Meeting::new(&officer, " ", &room, at),
            Err(DomainError::Validation(_))
        ));

        let meeting = Meeting::new(&officer, "Snitch", &room, at).unwrap();
        assert_eq!(meeting.informant_name(), "Snitch");
        assert_eq!(meeting.room().room_type, RoomType::Meeting);
    }
}
