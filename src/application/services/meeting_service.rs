//! Meeting Service - Scheduling and cancelling informant meetings

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::application::ports::outbound::{
    MeetingRepositoryPort, OfficerRepositoryPort, RepositoryError, RoomRepositoryPort,
};
use crate::application::services::errors::{ServiceError, ServiceResult};
use crate::application::services::room_management_service::release_after_failed_save;
use crate::application::services::scheduling_lock::SchedulingLock;
use crate::domain::entities::{Meeting, Officer};
use crate::domain::value_objects::{
    format_scheduled_time, MeetingId, OfficerId, RoomType, ScheduledTime,
};
use crate::domain::DomainError;

#[async_trait]
pub trait MeetingService: Send + Sync {
    /// Book the first available meeting room for the officer and informant
    async fn schedule_meeting(
        &self,
        officer_id: OfficerId,
        informant_name: &str,
        scheduled_at: ScheduledTime,
    ) -> ServiceResult<Meeting>;

    /// Release the meeting's room and delete the meeting
    async fn cancel_meeting(&self, id: MeetingId) -> ServiceResult<()>;

    async fn get_meeting(&self, id: MeetingId) -> ServiceResult<Meeting>;

    async fn list_meetings(&self) -> ServiceResult<Vec<Meeting>>;

    async fn upcoming_meetings_for_officer(
        &self,
        officer_id: OfficerId,
        now: ScheduledTime,
    ) -> ServiceResult<Vec<Meeting>>;
}

pub struct MeetingServiceImpl {
    officers: Arc<dyn OfficerRepositoryPort>,
    rooms: Arc<dyn RoomRepositoryPort>,
    meetings: Arc<dyn MeetingRepositoryPort>,
    lock: SchedulingLock,
}

impl MeetingServiceImpl {
    pub fn new(
        officers: Arc<dyn OfficerRepositoryPort>,
        rooms: Arc<dyn RoomRepositoryPort>,
        meetings: Arc<dyn MeetingRepositoryPort>,
        lock: SchedulingLock,
    ) -> Self {
        Self {
            officers,
            rooms,
            meetings,
            lock,
        }
    }

    async fn load_officer(&self, id: OfficerId) -> ServiceResult<Officer> {
        self.officers
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Officer", id))
    }

    /// Put a deleted meeting back after its room could not be released.
    /// The room is still booked, so the pair stays consistent.
    async fn restore_after_failed_release(
        &self,
        meeting: &Meeting,
        cause: RepositoryError,
    ) -> ServiceError {
        match self.meetings.save(meeting).await {
            Ok(()) => {
                warn!(meeting_id = %meeting.id(), error = %cause, "Room release failed, meeting restored");
                ServiceError::Repository(cause)
            }
            Err(compensation) => {
                warn!(
                    meeting_id = %meeting.id(),
                    error = %cause,
                    compensation_error = %compensation,
                    "Room release failed and meeting could not be restored"
                );
                ServiceError::PartialWrite {
                    operation: "release room",
                    cause,
                    compensation,
                }
            }
        }
    }
}

#[async_trait]
impl MeetingService for MeetingServiceImpl {
    #[instrument(skip(self))]
    async fn schedule_meeting(
        &self,
        officer_id: OfficerId,
        informant_name: &str,
        scheduled_at: ScheduledTime,
    ) -> ServiceResult<Meeting> {
        let _guard = self.lock.acquire().await;

        let officer = self.load_officer(officer_id).await?;
        let informant_name = informant_name.trim();
        if informant_name.is_empty() {
            return Err(DomainError::validation("Informant name cannot be empty").into());
        }

        let existing = self.meetings.find_by_officer_id(officer.id()).await?;
        if existing.iter().any(|m| m.scheduled_at() == scheduled_at) {
            return Err(ServiceError::Conflict(format!(
                "Officer {} already has a meeting at {}",
                officer.name(),
                format_scheduled_time(&scheduled_at)
            )));
        }

        let mut room = self
            .rooms
            .find_available_by_type(RoomType::Meeting)
            .await?
            .into_iter()
            .next()
            .ok_or(ServiceError::NoResourceAvailable(RoomType::Meeting))?;
        debug!(room_id = %room.id(), "Selected room");

        let meeting = Meeting::new(&officer, informant_name, &room, scheduled_at)?;

        room.book()?;
        self.rooms.save(&room).await?;
        if let Err(cause) = self.meetings.save(&meeting).await {
            return Err(
                release_after_failed_save(self.rooms.as_ref(), room, "save meeting", cause).await,
            );
        }

        info!(meeting_id = %meeting.id(), room_id = %room.id(), "Scheduled meeting");
        Ok(meeting)
    }

    #[instrument(skip(self))]
    async fn cancel_meeting(&self, id: MeetingId) -> ServiceResult<()> {
        let _guard = self.lock.acquire().await;

        let meeting = self.get_meeting(id).await?;
        let room_id = meeting.room().id;

        // The meeting goes first so a stored meeting never points at an available room
        self.meetings.delete_by_id(id).await?;

        match self.rooms.find_by_id(room_id).await {
            Ok(Some(mut room)) => {
                room.release();
                if let Err(cause) = self.rooms.save(&room).await {
                    return Err(self.restore_after_failed_release(&meeting, cause).await);
                }
            }
            Ok(None) => {
                warn!(room_id = %room_id, "Meeting room no longer stored, nothing to release")
            }
            Err(cause) => return Err(self.restore_after_failed_release(&meeting, cause).await),
        }

        info!(meeting_id = %id, room_id = %room_id, "Cancelled meeting");
        Ok(())
    }

    async fn get_meeting(&self, id: MeetingId) -> ServiceResult<Meeting> {
        self.meetings
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Meeting", id))
    }

    async fn list_meetings(&self) -> ServiceResult<Vec<Meeting>> {
        Ok(self.meetings.find_all().await?)
    }

    #[instrument(skip(self))]
    async fn upcoming_meetings_for_officer(
        &self,
        officer_id: OfficerId,
        now: ScheduledTime,
    ) -> ServiceResult<Vec<Meeting>> {
        let officer = self.load_officer(officer_id).await?;
        let meetings = self.meetings.find_by_officer_id(officer.id()).await?;
        Ok(meetings
            .into_iter()
            .filter(|m| m.scheduled_at() > now)
            .collect())
    }
}
