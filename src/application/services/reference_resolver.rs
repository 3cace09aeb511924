//! Reference resolution - Turns the references held by activities back into entities
//!
//! The owning repository is always consulted first. Only when it has no row
//! for the id is the entity rebuilt from the snapshot stored on the
//! reference, keeping the original id.

use std::sync::Arc;

use tracing::debug;

use crate::application::ports::outbound::{
    DetaineeRepositoryPort, OfficerRepositoryPort, RepositoryError, RoomRepositoryPort,
};
use crate::domain::entities::{
    Detainee, DetaineeRef, Interrogation, Meeting, Officer, OfficerRef, Room, RoomRef,
};
use crate::domain::DomainError;

/// Where a resolved entity came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The row held by the owning repository
    Canonical(T),
    /// Rebuilt from the reference snapshot
    Reconstructed(T),
}

impl<T> Resolution<T> {
    pub fn is_canonical(&self) -> bool {
        matches!(self, Self::Canonical(_))
    }

    pub fn get(&self) -> &T {
        match self {
            Self::Canonical(value) | Self::Reconstructed(value) => value,
        }
    }

    pub fn into_inner(self) -> T {
        match self {
            Self::Canonical(value) | Self::Reconstructed(value) => value,
        }
    }
}

#[derive(Clone)]
pub struct ReferenceResolver {
    officers: Arc<dyn OfficerRepositoryPort>,
    detainees: Arc<dyn DetaineeRepositoryPort>,
    rooms: Arc<dyn RoomRepositoryPort>,
}

impl ReferenceResolver {
    pub fn new(
        officers: Arc<dyn OfficerRepositoryPort>,
        detainees: Arc<dyn DetaineeRepositoryPort>,
        rooms: Arc<dyn RoomRepositoryPort>,
    ) -> Self {
        Self {
            officers,
            detainees,
            rooms,
        }
    }

    pub async fn resolve_officer(
        &self,
        reference: &OfficerRef,
    ) -> Result<Resolution<Officer>, RepositoryError> {
        if let Some(officer) = self.officers.find_by_id(reference.id).await? {
            return Ok(Resolution::Canonical(officer));
        }
        debug!(officer_id = %reference.id, "Officer not stored, rebuilding from snapshot");
        let officer = reference.to_officer().map_err(invalid_snapshot)?;
        Ok(Resolution::Reconstructed(officer))
    }

    pub async fn resolve_detainee(
        &self,
        reference: &DetaineeRef,
    ) -> Result<Resolution<Detainee>, RepositoryError> {
        if let Some(detainee) = self.detainees.find_by_id(reference.id).await? {
            return Ok(Resolution::Canonical(detainee));
        }
        debug!(detainee_id = %reference.id, "Detainee not stored, rebuilding from snapshot");
        let detainee = reference.to_detainee().map_err(invalid_snapshot)?;
        Ok(Resolution::Reconstructed(detainee))
    }

    pub async fn resolve_room(&self, reference: &RoomRef) -> Result<Resolution<Room>, RepositoryError> {
        if let Some(room) = self.rooms.find_by_id(reference.id).await? {
            return Ok(Resolution::Canonical(room));
        }
        debug!(room_id = %reference.id, "Room not stored, rebuilding from snapshot");
        Ok(Resolution::Reconstructed(reference.to_booked_room()))
    }

    /// Same interrogation with every reference refreshed from its owner.
    /// Fails with a domain error when the resolved room has the wrong type.
    pub async fn refresh_interrogation(
        &self,
        interrogation: &Interrogation,
    ) -> Result<Result<Interrogation, DomainError>, RepositoryError> {
        let officer = self.resolve_officer(interrogation.officer()).await?;
        let detainee = self.resolve_detainee(interrogation.detainee()).await?;
        let room = self.resolve_room(interrogation.room()).await?;

        Ok(Interrogation::restore(
            interrogation.id(),
            OfficerRef::from(officer.get()),
            DetaineeRef::from(detainee.get()),
            RoomRef::from(room.get()),
            interrogation.scheduled_at(),
        ))
    }

    pub async fn refresh_meeting(
        &self,
        meeting: &Meeting,
    ) -> Result<Result<Meeting, DomainError>, RepositoryError> {
        let officer = self.resolve_officer(meeting.officer()).await?;
        let room = self.resolve_room(meeting.room()).await?;

        Ok(Meeting::restore(
            meeting.id(),
            OfficerRef::from(officer.get()),
            meeting.informant_name(),
            RoomRef::from(room.get()),
            meeting.scheduled_at(),
        ))
    }
}

fn invalid_snapshot(err: DomainError) -> RepositoryError {
    RepositoryError::Serialization(format!("Invalid reference snapshot: {}", err))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{parse_scheduled_time, Rank, RoomType};
    use crate::infrastructure::persistence::memory::{
        InMemoryDetaineeRepository, InMemoryOfficerRepository, InMemoryRoomRepository,
    };

    fn resolver() -> (
        ReferenceResolver,
        Arc<InMemoryOfficerRepository>,
        Arc<InMemoryRoomRepository>,
    ) {
        let officers = Arc::new(InMemoryOfficerRepository::new());
        let detainees = Arc::new(InMemoryDetaineeRepository::new());
        let rooms = Arc::new(InMemoryRoomRepository::new());
        (
            ReferenceResolver::new(officers.clone(), detainees, rooms.clone()),
            officers,
            rooms,
        )
    }

    #[tokio::test]
    async fn test_canonical_officer_wins_over_snapshot() {
        let (resolver, officers, _) = resolver();
        let mut officer = Officer::new("Jane Doe", Rank::sergeant()).unwrap();
        let stale = OfficerRef::from(&officer);
        officer.promote_to(Rank::inspector()).unwrap();
        officers.save(&officer).await.unwrap();

        let resolved = resolver.resolve_officer(&stale).await.unwrap();

        assert!(resolved.is_canonical());
        assert_eq!(resolved.get().rank(), &Rank::inspector());
    }

    #[tokio::test]
    async fn test_missing_entities_are_rebuilt_with_same_id() {
        let (resolver, _, _) = resolver();
        let detainee = Detainee::new("Joe Bloggs", "Burglary").unwrap();
        let room = Room::new(RoomType::Interrogation);

        let resolved_detainee = resolver
            .resolve_detainee(&DetaineeRef::from(&detainee))
            .await
            .unwrap();
        let resolved_room = resolver.resolve_room(&RoomRef::from(&room)).await.unwrap();

        assert!(!resolved_detainee.is_canonical());
        assert_eq!(resolved_detainee.into_inner(), detainee);
        assert_eq!(resolved_room.get().id(), room.id());
        assert!(resolved_room.get().is_booked());
    }

    #[tokio::test]
    async fn test_refresh_interrogation_uses_current_officer() {
        let (resolver, officers, rooms) = resolver();
        let mut officer = Officer::new("Jane Doe", Rank::sergeant()).unwrap();
        let detainee = Detainee::new("Joe Bloggs", "Burglary").unwrap();
        let room = Room::new(RoomType::Interrogation);
        rooms.save(&room).await.unwrap();
        let at = parse_scheduled_time("2024-01-01 10:00").unwrap();
        let interrogation = Interrogation::new(&officer, &detainee, &room, at).unwrap();

        officer.promote_to(Rank::inspector()).unwrap();
        officers.save(&officer).await.unwrap();

        let refreshed = resolver
            .refresh_interrogation(&interrogation)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(refreshed.id(), interrogation.id());
        assert_eq!(refreshed.officer().rank, Rank::inspector());
        assert_eq!(refreshed.detainee().id, detainee.id());
    }
}
