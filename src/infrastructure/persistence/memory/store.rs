//! Transient repositories backed by an in-process table

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::application::ports::outbound::{
    DetaineeRepositoryPort, InterrogationRepositoryPort, MeetingRepositoryPort,
    OfficerRepositoryPort, RepositoryError, RoomRepositoryPort,
};
use crate::domain::entities::{Detainee, Interrogation, Meeting, Officer, Room};
use crate::infrastructure::persistence::entity_table::{EntityTable, Identified};

/// Insertion-ordered rows behind a read/write lock. Nothing survives the process.
#[derive(Debug)]
pub struct InMemoryStore<T: Identified> {
    table: RwLock<EntityTable<T>>,
}

impl<T: Identified> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self {
            table: RwLock::new(EntityTable::new()),
        }
    }
}

impl<T: Identified> InMemoryStore<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn upsert(&self, row: T) {
        self.table.write().await.upsert(row);
    }

    pub async fn get(&self, id: T::Id) -> Option<T> {
        self.table.read().await.get(id).cloned()
    }

    pub async fn all(&self) -> Vec<T> {
        self.table.read().await.to_vec()
    }

    pub async fn remove(&self, id: T::Id) {
        self.table.write().await.remove(id);
    }

    pub async fn len(&self) -> usize {
        self.table.read().await.len()
    }
}

pub type InMemoryRoomRepository = InMemoryStore<Room>;
pub type InMemoryOfficerRepository = InMemoryStore<Officer>;
pub type InMemoryDetaineeRepository = InMemoryStore<Detainee>;
pub type InMemoryInterrogationRepository = InMemoryStore<Interrogation>;
pub type InMemoryMeetingRepository = InMemoryStore<Meeting>;

macro_rules! impl_in_memory_port {
    ($port:ident, $entity:ty) => {
        #[async_trait]
        impl $port for InMemoryStore<$entity> {
            async fn save(&self, row: &$entity) -> Result<(), RepositoryError> {
                self.upsert(row.clone()).await;
                Ok(())
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
                self.remove(id).await;
                Ok(())
            }
        }
    };
}

impl_in_memory_port!(RoomRepositoryPort, Room);
impl_in_memory_port!(OfficerRepositoryPort, Officer);
impl_in_memory_port!(DetaineeRepositoryPort, Detainee);
impl_in_memory_port!(InterrogationRepositoryPort, Interrogation);
impl_in_memory_port!(MeetingRepositoryPort, Meeting);
