//! Entity references held by scheduled activities
//!
//! An activity points at the officer, detainee and room it involves by id.
//! Each reference also carries a snapshot of the fields captured at
//! scheduling time. The snapshot is only a fallback for rebuilding the
//! entity when its owning repository no longer (or never) had it; the
//! repository copy is always authoritative.

use crate::domain::entities::{Detainee, Officer, Room};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{DetaineeId, OfficerId, Rank, RoomId, RoomType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficerRef {
    pub id: OfficerId,
    pub name: String,
    pub rank: Rank,
}

impl OfficerRef {
    /// Best-effort officer rebuilt from the snapshot, id preserved
    pub fn to_officer(&self) -> Result<Officer, DomainError> {
        Officer::restore(self.id, self.name.clone(), self.rank.clone())
    }
}

impl From<&Officer> for OfficerRef {
    fn from(officer: &Officer) -> Self {
        Self {
            id: officer.id(),
            name: officer.name().to_string(),
            rank: officer.rank().clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetaineeRef {
    pub id: DetaineeId,
    pub name: String,
    pub crime: String,
}

impl DetaineeRef {
    pub fn to_detainee(&self) -> Result<Detainee, DomainError> {
        Detainee::restore(self.id, self.name.clone(), self.crime.clone())
    }
}

impl From<&Detainee> for DetaineeRef {
    fn from(detainee: &Detainee) -> Self {
        Self {
            id: detainee.id(),
            name: detainee.name().to_string(),
            crime: detainee.crime().to_string(),
        }
    }
}

/// Room reference. Availability is not carried; it belongs to the room
/// repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomRef {
    pub id: RoomId,
    pub room_type: RoomType,
}

impl RoomRef {
    /// Rebuilt room; a room that still hosts an activity is booked
    pub fn to_booked_room(&self) -> Room {
        Room::restore(self.id, self.room_type, false)
    }

    pub(crate) fn require_type(&self, expected: RoomType) -> Result<(), DomainError> {
        if self.room_type != expected {
            return Err(DomainError::RoomTypeMismatch {
                room_id: self.id,
                expected,
                actual: self.room_type,
            });
        }
        Ok(())
    }
}

impl From<&Room> for RoomRef {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id(),
            room_type: room.room_type(),
        }
    }
}
