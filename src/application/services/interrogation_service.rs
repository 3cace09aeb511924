//! Interrogation Service - Scheduling interrogations into interrogation rooms
//!
//! Scheduling picks the first available interrogation room in store order.
//! Everything up to the booking is read-only; the room is booked and saved
//! before the interrogation, and released again if the interrogation cannot
//! be saved.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument};

use crate::application::ports::outbound::{
    DetaineeRepositoryPort, InterrogationRepositoryPort, OfficerRepositoryPort,
    RoomRepositoryPort,
};
use crate::application::services::errors::{ServiceError, ServiceResult};
use crate::application::services::reference_resolver::{ReferenceResolver, Resolution};
use crate::application::services::room_management_service::release_after_failed_save;
use crate::application::services::scheduling_lock::SchedulingLock;
use crate::domain::entities::{Detainee, Interrogation, Officer, Room};
use crate::domain::value_objects::{
    format_scheduled_time, DetaineeId, InterrogationId, OfficerId, Rank, RoomType, ScheduledTime,
};

/// Lowest rank level allowed to lead an interrogation unless configured otherwise
pub const DEFAULT_MINIMUM_INTERROGATION_LEVEL: u32 = 3;

/// Request to schedule an interrogation
#[derive(Debug, Clone)]
pub struct ScheduleInterrogationRequest {
    pub officer_id: OfficerId,
    pub detainee: Detainee,
    pub scheduled_at: ScheduledTime,
}

/// An interrogation with its references resolved
#[derive(Debug, Clone)]
pub struct InterrogationDetails {
    pub interrogation: Interrogation,
    pub officer: Resolution<Officer>,
    pub detainee: Resolution<Detainee>,
    pub room: Resolution<Room>,
}

#[async_trait]
pub trait InterrogationService: Send + Sync {
    async fn schedule_interrogation(
        &self,
        request: ScheduleInterrogationRequest,
    ) -> ServiceResult<Interrogation>;

    /// Look the detainee up first, then schedule
    async fn schedule_for_detainee(
        &self,
        officer_id: OfficerId,
        detainee_id: DetaineeId,
        scheduled_at: ScheduledTime,
    ) -> ServiceResult<Interrogation>;

    async fn get_interrogation(&self, id: InterrogationId) -> ServiceResult<Interrogation>;

    async fn list_interrogations(&self) -> ServiceResult<Vec<Interrogation>>;

    async fn interrogations_for_officer(
        &self,
        officer_id: OfficerId,
    ) -> ServiceResult<Vec<Interrogation>>;

    /// The officer's interrogations scheduled strictly after `now`
    async fn upcoming_interrogations_for_officer(
        &self,
        officer_id: OfficerId,
        now: ScheduledTime,
    ) -> ServiceResult<Vec<Interrogation>>;

    async fn interrogation_details(&self, id: InterrogationId)
        -> ServiceResult<InterrogationDetails>;
}

pub struct InterrogationServiceImpl {
    officers: Arc<dyn OfficerRepositoryPort>,
    detainees: Arc<dyn DetaineeRepositoryPort>,
    rooms: Arc<dyn RoomRepositoryPort>,
    interrogations: Arc<dyn InterrogationRepositoryPort>,
    resolver: ReferenceResolver,
    lock: SchedulingLock,
    minimum_level: u32,
}

impl InterrogationServiceImpl {
    pub fn new(
        officers: Arc<dyn OfficerRepositoryPort>,
        detainees: Arc<dyn DetaineeRepositoryPort>,
        rooms: Arc<dyn RoomRepositoryPort>,
        interrogations: Arc<dyn InterrogationRepositoryPort>,
        lock: SchedulingLock,
    ) -> Self {
        let resolver = ReferenceResolver::new(officers.clone(), detainees.clone(), rooms.clone());
        Self {
            officers,
            detainees,
            rooms,
            interrogations,
            resolver,
            lock,
            minimum_level: DEFAULT_MINIMUM_INTERROGATION_LEVEL,
        }
    }

    pub fn with_minimum_level(mut self, level: u32) -> Self {
        self.minimum_level = level;
        self
    }

    pub fn minimum_level(&self) -> u32 {
        self.minimum_level
    }

    async fn load_officer(&self, id: OfficerId) -> ServiceResult<Officer> {
        self.officers
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Officer", id))
    }

    fn check_rank(&self, rank: &Rank) -> ServiceResult<()> {
        if rank.level() < self.minimum_level {
            return Err(ServiceError::InsufficientRank {
                required: self.minimum_level,
                actual: rank.clone(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl InterrogationService for InterrogationServiceImpl {
    #[instrument(skip(self, request), fields(officer_id = %request.officer_id, detainee_id = %request.detainee.id()))]
    async fn schedule_interrogation(
        &self,
        request: ScheduleInterrogationRequest,
    ) -> ServiceResult<Interrogation> {
        let _guard = self.lock.acquire().await;
        let at = request.scheduled_at;

        let officer = self.load_officer(request.officer_id).await?;
        self.check_rank(officer.rank())?;

        // Exact timestamps only; overlapping intervals are not detected
        let existing = self.interrogations.find_by_officer_id(officer.id()).await?;
        if existing.iter().any(|i| i.scheduled_at() == at) {
            return Err(ServiceError::Conflict(format!(
                "Officer {} already has an interrogation at {}",
                officer.name(),
                format_scheduled_time(&at)
            )));
        }

        let mut room = self
            .rooms
            .find_available_by_type(RoomType::Interrogation)
            .await?
            .into_iter()
            .next()
            .ok_or(ServiceError::NoResourceAvailable(RoomType::Interrogation))?;
        debug!(room_id = %room.id(), "Selected room");

        let interrogation = Interrogation::new(&officer, &request.detainee, &room, at)?;

        room.book()?;
        self.rooms.save(&room).await?;
        if let Err(cause) = self.interrogations.save(&interrogation).await {
            return Err(
                release_after_failed_save(self.rooms.as_ref(), room, "save interrogation", cause)
                    .await,
            );
        }

        info!(
            interrogation_id = %interrogation.id(),
            room_id = %room.id(),
            at = %format_scheduled_time(&at),
            "Scheduled interrogation"
        );
        Ok(interrogation)
    }

    #[instrument(skip(self))]
    async fn schedule_for_detainee(
        &self,
        officer_id: OfficerId,
        detainee_id: DetaineeId,
        scheduled_at: ScheduledTime,
    ) -> ServiceResult<Interrogation> {
        let detainee = self
            .detainees
            .find_by_id(detainee_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Detainee", detainee_id))?;

        self.schedule_interrogation(ScheduleInterrogationRequest {
            officer_id,
            detainee,
            scheduled_at,
        })
        .await
    }

    async fn get_interrogation(&self, id: InterrogationId) -> ServiceResult<Interrogation> {
        self.interrogations
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Interrogation", id))
    }

    async fn list_interrogations(&self) -> ServiceResult<Vec<Interrogation>> {
        Ok(self.interrogations.find_all().await?)
    }

    #[instrument(skip(self))]
    async fn interrogations_for_officer(
        &self,
        officer_id: OfficerId,
    ) -> ServiceResult<Vec<Interrogation>> {
        let officer = self.load_officer(officer_id).await?;
        Ok(self.interrogations.find_by_officer_id(officer.id()).await?)
    }

    #[instrument(skip(self))]
    async fn upcoming_interrogations_for_officer(
        &self,
        officer_id: OfficerId,
        now: ScheduledTime,
    ) -> ServiceResult<Vec<Interrogation>> {
        let all = self.interrogations_for_officer(officer_id).await?;
        Ok(all.into_iter().filter(|i| i.scheduled_at() > now).collect())
    }

    #[instrument(skip(self))]
    async fn interrogation_details(
        &self,
        id: InterrogationId,
    ) -> ServiceResult<InterrogationDetails> {
        let interrogation = self.get_interrogation(id).await?;
        let officer = self.resolver.resolve_officer(interrogation.officer()).await?;
        let detainee = self
            .resolver
            .resolve_detainee(interrogation.detainee())
            .await?;
        let room = self.resolver.resolve_room(interrogation.room()).await?;

        Ok(InterrogationDetails {
            interrogation,
            officer,
            detainee,
            room,
        })
    }
}
