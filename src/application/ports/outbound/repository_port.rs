//! Repository ports - Interfaces for data persistence
//!
//! These traits define the contracts that infrastructure repositories must implement.
//! Application services depend on these traits, not concrete implementations.
//!
//! Every implementation returns rows in insertion order; `save` on an existing
//! id replaces the row in place. The filtered queries have default
//! implementations on top of `find_all`.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::entities::{Detainee, Interrogation, Meeting, Officer, Room};
use crate::domain::value_objects::{
    DetaineeId, InterrogationId, MeetingId, OfficerId, RoomId, RoomType, ScheduledTime,
};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// =============================================================================
// Room Repository Port
// =============================================================================

/// Repository port for Room operations
#[async_trait]
pub trait RoomRepositoryPort: Send + Sync {
    /// Insert or update a room
    async fn save(&self, room: &Room) -> Result<(), RepositoryError>;

    /// Get a room by ID
    async fn find_by_id(&self, id: RoomId) -> Result<Option<Room>, RepositoryError>;

    /// List all rooms
    async fn find_all(&self) -> Result<Vec<Room>, RepositoryError>;

    /// Delete a room; unknown ids are ignored
    async fn delete_by_id(&self, id: RoomId) -> Result<(), RepositoryError>;

    /// List rooms of one type
    async fn find_by_type(&self, room_type: RoomType) -> Result<Vec<Room>, RepositoryError> {
        let rooms = self.find_all().await?;
        Ok(rooms
            .into_iter()
            .filter(|r| r.room_type() == room_type)
            .collect())
    }

    /// List rooms that are not booked
    async fn find_available(&self) -> Result<Vec<Room>, RepositoryError> {
        let rooms = self.find_all().await?;
        Ok(rooms.into_iter().filter(Room::is_available).collect())
    }

    /// List unbooked rooms of one type
    async fn find_available_by_type(
        &self,
        room_type: RoomType,
    ) -> Result<Vec<Room>, RepositoryError> {
        let rooms = self.find_all().await?;
        Ok(rooms
            .into_iter()
            .filter(|r| r.room_type() == room_type && r.is_available())
            .collect())
    }
}

// =============================================================================
// Officer Repository Port
// =============================================================================

/// Repository port for Officer operations
#[async_trait]
pub trait OfficerRepositoryPort: Send + Sync {
    async fn save(&self, officer: &Officer) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: OfficerId) -> Result<Option<Officer>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Officer>, RepositoryError>;

    async fn delete_by_id(&self, id: OfficerId) -> Result<(), RepositoryError>;
}

// =============================================================================
// Detainee Repository Port
// =============================================================================

/// Repository port for Detainee operations
#[async_trait]
pub trait DetaineeRepositoryPort: Send + Sync {
    async fn save(&self, detainee: &Detainee) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: DetaineeId) -> Result<Option<Detainee>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Detainee>, RepositoryError>;

    async fn delete_by_id(&self, id: DetaineeId) -> Result<(), RepositoryError>;

    /// Case-insensitive substring match on the name
    async fn find_by_name_containing(&self, query: &str) -> Result<Vec<Detainee>, RepositoryError> {
        let needle = query.trim().to_lowercase();
        let detainees = self.find_all().await?;
        Ok(detainees
            .into_iter()
            .filter(|d| d.name().to_lowercase().contains(&needle))
            .collect())
    }

    /// Case-insensitive exact match on the crime
    async fn find_by_crime(&self, crime: &str) -> Result<Vec<Detainee>, RepositoryError> {
        let wanted = crime.trim();
        let detainees = self.find_all().await?;
        Ok(detainees
            .into_iter()
            .filter(|d| d.crime().trim().eq_ignore_ascii_case(wanted))
            .collect())
    }
}

// =============================================================================
// Interrogation Repository Port
// =============================================================================

/// Repository port for Interrogation operations
#[async_trait]
pub trait InterrogationRepositoryPort: Send + Sync {
    async fn save(&self, interrogation: &Interrogation) -> Result<(), RepositoryError>;

    async fn find_by_id(
        &self,
        id: InterrogationId,
    ) -> Result<Option<Interrogation>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Interrogation>, RepositoryError>;

    async fn delete_by_id(&self, id: InterrogationId) -> Result<(), RepositoryError>;

    async fn find_by_officer_id(
        &self,
        officer_id: OfficerId,
    ) -> Result<Vec<Interrogation>, RepositoryError> {
        let rows = self.find_all().await?;
        Ok(rows
            .into_iter()
            .filter(|i| i.officer().id == officer_id)
            .collect())
    }

    async fn find_by_detainee_id(
        &self,
        detainee_id: DetaineeId,
    ) -> Result<Vec<Interrogation>, RepositoryError> {
        let rows = self.find_all().await?;
        Ok(rows
            .into_iter()
            .filter(|i| i.detainee().id == detainee_id)
            .collect())
    }

    async fn find_by_room_id(&self, room_id: RoomId) -> Result<Vec<Interrogation>, RepositoryError> {
        let rows = self.find_all().await?;
        Ok(rows.into_iter().filter(|i| i.room().id == room_id).collect())
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Interrogation>, RepositoryError> {
        let rows = self.find_all().await?;
        Ok(rows
            .into_iter()
            .filter(|i| i.scheduled_at().date() == date)
            .collect())
    }

    /// Interrogations scheduled strictly after `now`
    async fn find_upcoming(&self, now: ScheduledTime) -> Result<Vec<Interrogation>, RepositoryError> {
        let rows = self.find_all().await?;
        Ok(rows
            .into_iter()
            .filter(|i| i.scheduled_at() > now)
            .collect())
    }

    /// Interrogations strictly between `start` and `end`
    async fn find_by_time_range(
        &self,
        start: ScheduledTime,
        end: ScheduledTime,
    ) -> Result<Vec<Interrogation>, RepositoryError> {
        let rows = self.find_all().await?;
        Ok(rows
            .into_iter()
            .filter(|i| i.scheduled_at() > start && i.scheduled_at() < end)
            .collect())
    }
}

// =============================================================================
// Meeting Repository Port
// =============================================================================

/// Repository port for Meeting operations
#[async_trait]
pub trait MeetingRepositoryPort: Send + Sync {
    async fn save(&self, meeting: &Meeting) -> Result<(), RepositoryError>;

    async fn find_by_id(&self, id: MeetingId) -> Result<Option<Meeting>, RepositoryError>;

    async fn find_all(&self) -> Result<Vec<Meeting>, RepositoryError>;

    async fn delete_by_id(&self, id: MeetingId) -> Result<(), RepositoryError>;

    async fn find_by_officer_id(&self, officer_id: OfficerId) -> Result<Vec<Meeting>, RepositoryError> {
        let rows = self.find_all().await?;
        Ok(rows
            .into_iter()
            .filter(|m| m.officer().id == officer_id)
            .collect())
    }

    async fn find_by_room_id(&self, room_id: RoomId) -> Result<Vec<Meeting>, RepositoryError> {
        let rows = self.find_all().await?;
        Ok(rows.into_iter().filter(|m| m.room().id == room_id).collect())
    }

    async fn find_by_date(&self, date: NaiveDate) -> Result<Vec<Meeting>, RepositoryError> {
        let rows = self.find_all().await?;
        Ok(rows
            .into_iter()
            .filter(|m| m.scheduled_at().date() == date)
            .collect())
    }

    /// Meetings scheduled strictly after `now`
    async fn find_upcoming(&self, now: ScheduledTime) -> Result<Vec<Meeting>, RepositoryError> {
        let rows = self.find_all().await?;
        Ok(rows
            .into_iter()
            .filter(|m| m.scheduled_at() > now)
            .collect())
    }
}
