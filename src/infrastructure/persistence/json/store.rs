//! Durable repositories: an in-memory table mirrored to a JSON collection file

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::application::ports::outbound::{
    DetaineeRepositoryPort, InterrogationRepositoryPort, MeetingRepositoryPort,
    OfficerRepositoryPort, RepositoryError, RoomRepositoryPort,
};
use crate::application::services::ReferenceResolver;
use crate::domain::entities::{Detainee, Interrogation, Meeting, Officer, Room};
use crate::infrastructure::persistence::entity_table::{EntityTable, Identified};
use crate::infrastructure::persistence::json::collection::JsonCollection;
use crate::infrastructure::persistence::json::records::JsonEntity;

/// Rows are read from the file once when the store is opened. Every
/// mutation rewrites the whole file; the table only changes after the write
/// went through.
#[derive(Debug)]
pub struct JsonStore<T: JsonEntity> {
    collection: JsonCollection,
    table: RwLock<EntityTable<T>>,
}

pub type JsonRoomRepository = JsonStore<Room>;
pub type JsonOfficerRepository = JsonStore<Officer>;
pub type JsonDetaineeRepository = JsonStore<Detainee>;
pub type JsonInterrogationRepository = JsonStore<Interrogation>;
pub type JsonMeetingRepository = JsonStore<Meeting>;

impl<T: JsonEntity> JsonStore<T> {
    /// Load the collection, skipping records that do not form a valid entity
    pub async fn open(collection: JsonCollection) -> Self {
        let rows = decode_all::<T>(&collection).await;
        Self::with_rows(collection, rows)
    }

    fn with_rows(collection: JsonCollection, rows: Vec<T>) -> Self {
        let table = EntityTable::from_rows(rows);
        info!(collection = %collection.name(), rows = table.len(), "Opened JSON collection");
        Self {
            collection,
            table: RwLock::new(table),
        }
    }

    async fn get(&self, id: T::Id) -> Option<T> {
        self.table.read().await.get(id).cloned()
    }

    async fn all(&self) -> Vec<T> {
        self.table.read().await.to_vec()
    }

    /// Apply `change` to a copy of the table and persist it. The change
    /// returns false when it left the table untouched, and nothing is written.
    async fn mutate<F>(&self, change: F) -> Result<(), RepositoryError>
    where
        F: FnOnce(&mut EntityTable<T>) -> bool + Send,
    {
        let mut table = self.table.write().await;
        let mut next = table.clone();
        if !change(&mut next) {
            return Ok(());
        }

        let records: Vec<T::Record> = next.iter().map(JsonEntity::to_record).collect();
        self.collection.write(&records).await?;
        *table = next;
        Ok(())
    }
}

impl JsonStore<Interrogation> {
    /// Load interrogations and resolve their references through `resolver`
    pub async fn open_resolved(collection: JsonCollection, resolver: &ReferenceResolver) -> Self {
        let mut rows = Vec::new();
        for row in decode_all::<Interrogation>(&collection).await {
            match resolver.refresh_interrogation(&row).await {
                Ok(Ok(resolved)) => rows.push(resolved),
                Ok(Err(e)) => {
                    warn!(interrogation_id = %row.id(), error = %e, "Skipping interrogation with invalid references")
                }
                Err(e) => {
                    warn!(interrogation_id = %row.id(), error = %e, "Skipping interrogation, references could not be resolved")
                }
            }
        }
        Self::with_rows(collection, rows)
    }
}

impl JsonStore<Meeting> {
    /// Load meetings and resolve their references through `resolver`
    pub async fn open_resolved(collection: JsonCollection, resolver: &ReferenceResolver) -> Self {
        let mut rows = Vec::new();
        for row in decode_all::<Meeting>(&collection).await {
            match resolver.refresh_meeting(&row).await {
                Ok(Ok(resolved)) => rows.push(resolved),
                Ok(Err(e)) => {
                    warn!(meeting_id = %row.id(), error = %e, "Skipping meeting with invalid references")
                }
                Err(e) => {
                    warn!(meeting_id = %row.id(), error = %e, "Skipping meeting, references could not be resolved")
                }
            }
        }
        Self::with_rows(collection, rows)
    }
}

async fn decode_all<T: JsonEntity>(collection: &JsonCollection) -> Vec<T> {
    collection
        .load::<T::Record>()
        .await
        .into_iter()
        .filter_map(|record| match T::from_record(record) {
            Ok(entity) => Some(entity),
            Err(e) => {
                warn!(collection = %collection.name(), error = %e, "Skipping invalid record");
                None
            }
        })
        .collect()
}

macro_rules! impl_json_port {
    ($port:ident, $entity:ty) => {
        #[async_trait]
        impl $port for JsonStore<$entity> {
            async fn save(&self, row: &$entity) -> Result<(), RepositoryError> {
                let row = row.clone();
                self.mutate(move |table| {
                    table.upsert(row);
                    true
                })
                .await
            }

            async fn find_by_id(
                &self,
                id: <$entity as Identified>::Id,
            ) -> Result<Option<$entity>, RepositoryError> {
                Ok(self.get(id).await)
            }

            async fn find_all(&self) -> Result<Vec<$entity>, RepositoryError> {
                Ok(self.all().await)
            }

            async fn delete_by_id(
                &self,
                id: <$entity as Identified>::Id,
            ) -> Result<(), RepositoryError> {
                self.mutate(move |table| table.remove(id)).await
            }
        }
    };
}

impl_json_port!(RoomRepositoryPort, Room);
impl_json_port!(OfficerRepositoryPort, Officer);
impl_json_port!(DetaineeRepositoryPort, Detainee);
impl_json_port!(InterrogationRepositoryPort, Interrogation);
impl_json_port!(MeetingRepositoryPort, Meeting);
