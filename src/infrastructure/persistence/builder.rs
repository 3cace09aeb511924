//! Repository graph - Wires every repository, independent stores first
//!
//! Activity stores resolve their references while loading, so the officer,
//! detainee and room stores must be open before the interrogation and
//! meeting stores are.

use std::sync::Arc;

use tracing::info;

use crate::application::ports::outbound::{
    DetaineeRepositoryPort, InterrogationRepositoryPort, MeetingRepositoryPort,
    OfficerRepositoryPort, RepositoryError, RoomRepositoryPort,
};
use crate::application::services::ReferenceResolver;
use crate::infrastructure::persistence::json::{
    DataDirectory, JsonDetaineeRepository, JsonInterrogationRepository, JsonMeetingRepository,
    JsonOfficerRepository, JsonRoomRepository, DETAINEES, INTERROGATIONS, MEETINGS, OFFICERS,
    ROOMS,
};
use crate::infrastructure::persistence::memory::{
    InMemoryDetaineeRepository, InMemoryInterrogationRepository, InMemoryMeetingRepository,
    InMemoryOfficerRepository, InMemoryRoomRepository,
};

/// All repositories of one backend
#[derive(Clone)]
pub struct RepositoryGraph {
    pub rooms: Arc<dyn RoomRepositoryPort>,
    pub officers: Arc<dyn OfficerRepositoryPort>,
    pub detainees: Arc<dyn DetaineeRepositoryPort>,
    pub interrogations: Arc<dyn InterrogationRepositoryPort>,
    pub meetings: Arc<dyn MeetingRepositoryPort>,
}

impl RepositoryGraph {
    /// Empty transient repositories
    pub fn in_memory() -> Self {
        Self {
            rooms: Arc::new(InMemoryRoomRepository::new()),
            officers: Arc::new(InMemoryOfficerRepository::new()),
            detainees: Arc::new(InMemoryDetaineeRepository::new()),
            interrogations: Arc::new(InMemoryInterrogationRepository::new()),
            meetings: Arc::new(InMemoryMeetingRepository::new()),
        }
    }

    /// Open every collection under `data`
    pub async fn open_json(data: &DataDirectory) -> Result<Self, RepositoryError> {
        data.ensure_exists().await?;

        // Phase 1: stores without references
        let rooms: Arc<dyn RoomRepositoryPort> =
            Arc::new(JsonRoomRepository::open(data.collection(ROOMS)).await);
        let officers: Arc<dyn OfficerRepositoryPort> =
            Arc::new(JsonOfficerRepository::open(data.collection(OFFICERS)).await);
        let detainees: Arc<dyn DetaineeRepositoryPort> =
            Arc::new(JsonDetaineeRepository::open(data.collection(DETAINEES)).await);

        let resolver = ReferenceResolver::new(officers.clone(), detainees.clone(), rooms.clone());

        // Phase 2: activity stores, resolved against phase 1
        let interrogations: Arc<dyn InterrogationRepositoryPort> = Arc::new(
            JsonInterrogationRepository::open_resolved(data.collection(INTERROGATIONS), &resolver)
                .await,
        );
        let meetings: Arc<dyn MeetingRepositoryPort> = Arc::new(
            JsonMeetingRepository::open_resolved(data.collection(MEETINGS), &resolver).await,
        );

        info!(path = %data.root().display(), "JSON repositories ready");

        Ok(Self {
            rooms,
            officers,
            detainees,
            interrogations,
            meetings,
        })
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Detainee, Interrogation, Meeting, Officer, Room};
    use crate::domain::value_objects::{parse_scheduled_time, Rank, RoomType};
    use chrono::Timelike;

    #[tokio::test]
    async fn test_reopen_resolves_references_to_canonical_rows() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDirectory::new(dir.path());
        let graph = RepositoryGraph::open_json(&data).await.unwrap();

        let mut officer = Officer::new("Jane Doe", Rank::sergeant()).unwrap();
        let detainee = Detainee::new("Joe Bloggs", "Burglary").unwrap();
        let mut room = Room::new(RoomType::Interrogation);
        room.book().unwrap();
        graph.officers.save(&officer).await.unwrap();
        graph.detainees.save(&detainee).await.unwrap();
        graph.rooms.save(&room).await.unwrap();
        let at = parse_scheduled_time("2024-01-01 10:00").unwrap();
        let interrogation = Interrogation::new(&officer, &detainee, &room, at).unwrap();
        graph.interrogations.save(&interrogation).await.unwrap();

        // Promotion after scheduling leaves a stale snapshot in interrogations.json
        officer.promote_to(Rank::inspector()).unwrap();
        graph.officers.save(&officer).await.unwrap();

        let reopened = RepositoryGraph::open_json(&data).await.unwrap();
        let loaded = reopened
            .interrogations
            .find_by_id(interrogation.id())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(loaded.officer().id, officer.id());
        assert_eq!(loaded.officer().rank, Rank::inspector());
        assert_eq!(loaded.detainee().id, detainee.id());
        assert_eq!(loaded.room().id, room.id());
        assert_eq!(loaded.scheduled_at(), at);
        let reloaded_room = reopened.rooms.find_by_id(room.id()).await.unwrap().unwrap();
        assert!(reloaded_room.is_booked());
    }

    #[tokio::test]
    async fn test_activities_round_trip_with_fractional_seconds() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDirectory::new(dir.path());
        let graph = RepositoryGraph::open_json(&data).await.unwrap();

        let officer = Officer::new("Jane Doe", Rank::sergeant()).unwrap();
        let detainee = Detainee::new("Joe Bloggs", "Burglary").unwrap();
        let mut cell = Room::new(RoomType::Interrogation);
        cell.book().unwrap();
        let mut office = Room::new(RoomType::Meeting);
        office.book().unwrap();
        graph.officers.save(&officer).await.unwrap();
        graph.detainees.save(&detainee).await.unwrap();
        graph.rooms.save(&cell).await.unwrap();
        graph.rooms.save(&office).await.unwrap();

        let at = parse_scheduled_time("2024-01-01T10:00:00.250").unwrap();
        let interrogation = Interrogation::new(&officer, &detainee, &cell, at).unwrap();
        let meeting = Meeting::new(&officer, "Snitch", &office, at).unwrap();
        graph.interrogations.save(&interrogation).await.unwrap();
        graph.meetings.save(&meeting).await.unwrap();

        let reopened = RepositoryGraph::open_json(&data).await.unwrap();

        assert_eq!(reopened.officers.find_all().await.unwrap(), vec![officer]);
        assert_eq!(reopened.detainees.find_all().await.unwrap(), vec![detainee]);
        assert_eq!(
            reopened.rooms.find_all().await.unwrap(),
            vec![cell, office.clone()]
        );
        let interrogations = reopened.interrogations.find_all().await.unwrap();
        assert_eq!(interrogations, vec![interrogation]);
        assert_eq!(interrogations[0].scheduled_at().nanosecond(), 250_000_000);
        let meetings = reopened.meetings.find_all().await.unwrap();
        assert_eq!(meetings, vec![meeting]);
        assert_eq!(meetings[0].scheduled_at(), at);
        assert_eq!(meetings[0].room().id, office.id());
    }

    #[tokio::test]
    async fn test_missing_referenced_rows_are_reconstructed() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDirectory::new(dir.path());
        let graph = RepositoryGraph::open_json(&data).await.unwrap();

        // Neither the officer nor the room is stored on its own
        let officer = Officer::new("John Smith", Rank::officer()).unwrap();
        let room = Room::new(RoomType::Meeting);
        let at = parse_scheduled_time("2024-02-10 09:30").unwrap();
        let meeting = Meeting::new(&officer, "Snitch", &room, at).unwrap();
        graph.meetings.save(&meeting).await.unwrap();

        let reopened = RepositoryGraph::open_json(&data).await.unwrap();
        let loaded = reopened.meetings.find_all().await.unwrap();

        assert_eq!(loaded, vec![meeting]);
        assert!(reopened.officers.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_record_with_wrong_room_type_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let data = DataDirectory::new(dir.path());
        let graph = RepositoryGraph::open_json(&data).await.unwrap();

        let officer = Officer::new("Jane Doe", Rank::sergeant()).unwrap();
        let detainee = Detainee::new("Joe Bloggs", "Burglary").unwrap();
        let room = Room::new(RoomType::Interrogation);
        graph.rooms.save(&room).await.unwrap();
        let at = parse_scheduled_time("2024-01-01 10:00").unwrap();
        let good = Interrogation::new(&officer, &detainee, &room, at).unwrap();
        graph.interrogations.save(&good).await.unwrap();

        let path = dir.path().join("interrogations.json");
        let mut records: Vec<serde_json::Value> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let mut bad = records[0].clone();
        bad["id"] = serde_json::json!(crate::domain::value_objects::InterrogationId::new().to_string());
        bad["room"]["type"] = serde_json::json!("MEETING");
        bad["room"]["id"] = serde_json::json!(crate::domain::value_objects::RoomId::new().to_string());
        records.push(bad);
        std::fs::write(&path, serde_json::to_string(&records).unwrap()).unwrap();

        let reopened = RepositoryGraph::open_json(&data).await.unwrap();
        let loaded = reopened.interrogations.find_all().await.unwrap();

        assert_eq!(loaded, vec![good]);
    }
}
