//! On-disk record shapes and their mapping to domain entities

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Detainee, DetaineeRef, Interrogation, Meeting, Officer, OfficerRef, Room, RoomRef,
};
use crate::domain::value_objects::{
    DetaineeId, InterrogationId, MeetingId, OfficerId, Rank, RoomId, RoomType,
};
use crate::domain::DomainError;
use crate::infrastructure::persistence::entity_table::Identified;

/// An entity that can be stored as a JSON record
pub trait JsonEntity: Identified {
    type Record: Serialize + for<'de> Deserialize<'de> + Send + Sync;

    fn to_record(&self) -> Self::Record;

    /// Rebuild the entity; activity references come back as snapshots
    fn from_record(record: Self::Record) -> Result<Self, DomainError>;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankRecord {
    pub name: String,
    pub level: u32,
}

impl From<&Rank> for RankRecord {
    fn from(rank: &Rank) -> Self {
        Self {
            name: rank.name().to_string(),
            level: rank.level(),
        }
    }
}

impl RankRecord {
    fn into_rank(self) -> Result<Rank, DomainError> {
        Rank::new(self.name, self.level)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRecord {
    pub id: RoomId,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub available: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OfficerRecord {
    pub id: OfficerId,
    pub name: String,
    pub rank: RankRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetaineeRecord {
    pub id: DetaineeId,
    pub name: String,
    pub crime: String,
}

/// Room as embedded in an activity: no availability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomRefRecord {
    pub id: RoomId,
    #[serde(rename = "type")]
    pub room_type: RoomType,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterrogationRecord {
    pub id: InterrogationId,
    pub officer: OfficerRecord,
    pub detainee: DetaineeRecord,
    pub room: RoomRefRecord,
    pub scheduled_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeetingRecord {
    pub id: MeetingId,
    pub officer: OfficerRecord,
    pub informant_name: String,
    pub room: RoomRefRecord,
    pub scheduled_at: NaiveDateTime,
}

impl From<&OfficerRef> for OfficerRecord {
    fn from(officer: &OfficerRef) -> Self {
        Self {
            id: officer.id,
            name: officer.name.clone(),
            rank: RankRecord::from(&officer.rank),
        }
    }
}

impl OfficerRecord {
    fn into_ref(self) -> Result<OfficerRef, DomainError> {
        Ok(OfficerRef {
            id: self.id,
            name: self.name,
            rank: self.rank.into_rank()?,
        })
    }
}

impl From<&DetaineeRef> for DetaineeRecord {
    fn from(detainee: &DetaineeRef) -> Self {
        Self {
            id: detainee.id,
            name: detainee.name.clone(),
            crime: detainee.crime.clone(),
        }
    }
}

impl From<DetaineeRecord> for DetaineeRef {
    fn from(record: DetaineeRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            crime: record.crime,
        }
    }
}

impl From<&RoomRef> for RoomRefRecord {
    fn from(room: &RoomRef) -> Self {
        Self {
            id: room.id,
            room_type: room.room_type,
        }
    }
}

impl From<RoomRefRecord> for RoomRef {
    fn from(record: RoomRefRecord) -> Self {
        Self {
            id: record.id,
            room_type: record.room_type,
        }
    }
}

impl JsonEntity for Room {
    type Record = RoomRecord;

    fn to_record(&self) -> RoomRecord {
        RoomRecord {
            id: self.id(),
            room_type: self.room_type(),
            available: self.is_available(),
        }
    }

    fn from_record(record: RoomRecord) -> Result<Self, DomainError> {
        Ok(Room::restore(record.id, record.room_type, record.available))
    }
}

impl JsonEntity for Officer {
    type Record = OfficerRecord;

    fn to_record(&self) -> OfficerRecord {
        OfficerRecord::from(&OfficerRef::from(self))
    }

    fn from_record(record: OfficerRecord) -> Result<Self, DomainError> {
        record.into_ref()?.to_officer()
    }
}

impl JsonEntity for Detainee {
    type Record = DetaineeRecord;

    fn to_record(&self) -> DetaineeRecord {
        DetaineeRecord::from(&DetaineeRef::from(self))
    }

    fn from_record(record: DetaineeRecord) -> Result<Self, DomainError> {
        DetaineeRef::from(record).to_detainee()
    }
}

impl JsonEntity for Interrogation {
    type Record = InterrogationRecord;

    fn to_record(&self) -> InterrogationRecord {
        InterrogationRecord {
            id: self.id(),
            officer: OfficerRecord::from(self.officer()),
            detainee: DetaineeRecord::from(self.detainee()),
            room: RoomRefRecord::from(self.room()),
            scheduled_at: self.scheduled_at(),
        }
    }

    fn from_record(record: InterrogationRecord) -> Result<Self, DomainError> {
        Interrogation::restore(
            record.id,
            record.officer.into_ref()?,
            DetaineeRef::from(record.detainee),
            RoomRef::from(record.room),
            record.scheduled_at,
        )
    }
}

impl JsonEntity for Meeting {
    type Record = MeetingRecord;

    fn to_record(&self) -> MeetingRecord {
        MeetingRecord {
            id: self.id(),
            officer: OfficerRecord::from(self.officer()),
            informant_name: self.informant_name().to_string(),
            room: RoomRefRecord::from(self.room()),
            scheduled_at: self.scheduled_at(),
        }
    }

    fn from_record(record: MeetingRecord) -> Result<Self, DomainError> {
        Meeting::restore(
            record.id,
            record.officer.into_ref()?,
            record.informant_name,
            RoomRef::from(record.room),
            record.scheduled_at,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::parse_scheduled_time;
    use serde_json::json;

    #[test]
    fn test_interrogation_record_shape() {
        let officer = Officer::new("Jane Doe", Rank::sergeant()).unwrap();
        let detainee = Detainee::new("Joe Bloggs", "Burglary").unwrap();
        let room = Room::new(RoomType::Interrogation);
        let at = parse_scheduled_time("2024-01-01 10:00").unwrap();
        let interrogation = Interrogation::new(&officer, &detainee, &room, at).unwrap();

        let value = serde_json::to_value(interrogation.to_record()).unwrap();

        assert_eq!(value["scheduledAt"], json!("2024-01-01T10:00:00"));
        assert_eq!(value["room"], json!({ "id": room.id().to_string(), "type": "INTERROGATION" }));
        assert_eq!(value["officer"]["rank"], json!({ "name": "Sergeant", "level": 3 }));
        assert_eq!(value["detainee"]["crime"], json!("Burglary"));
    }

    #[test]
    fn test_meeting_record_uses_camel_case() {
        let officer = Officer::new("John Smith", Rank::officer()).unwrap();
        let room = Room::new(RoomType::Meeting);
        let at = parse_scheduled_time("2024-02-10 09:30").unwrap();
        let meeting = Meeting::new(&officer, "Snitch", &room, at).unwrap();

        let value = serde_json::to_value(meeting.to_record()).unwrap();
        assert_eq!(value["informantName"], json!("Snitch"));

        let back = Meeting::from_record(serde_json::from_value(value).unwrap()).unwrap();
        assert_eq!(back, meeting);
    }

    #[test]
    fn test_wrong_room_type_is_rejected_on_decode() {
        let value = json!({
            "id": InterrogationId::new().to_string(),
            "officer": { "id": OfficerId::new().to_string(), "name": "Jane", "rank": { "name": "Sergeant", "level": 3 } },
            "detainee": { "id": DetaineeId::new().to_string(), "name": "Joe", "crime": "Theft" },
            "room": { "id": RoomId::new().to_string(), "type": "MEETING" },
            "scheduledAt": "2024-01-01T10:00:00"
        });
        let record: InterrogationRecord = serde_json::from_value(value).unwrap();

        assert!(matches!(
            Interrogation::from_record(record),
            Err(DomainError::RoomTypeMismatch { .. })
        ));
    }

    #[test]
    fn test_room_record_keeps_availability() {
        let mut room = Room::new(RoomType::Production);
        room.book().unwrap();

        let value = serde_json::to_value(room.to_record()).unwrap();
        assert_eq!(value["available"], json!(false));
        assert_eq!(value["type"], json!("PRODUCTION"));

        let back = Room::from_record(serde_json::from_value(value).unwrap()).unwrap();
        assert_eq!(back, room);
    }
}
