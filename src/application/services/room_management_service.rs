//! Room Management Service - Creating rooms and moving them between available and booked

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::application::ports::outbound::{RepositoryError, RoomRepositoryPort};
use crate::application::services::errors::{ServiceError, ServiceResult};
use crate::application::services::scheduling_lock::SchedulingLock;
use crate::domain::entities::Room;
use crate::domain::value_objects::{RoomId, RoomType};

/// Room service trait defining the application use cases
#[async_trait]
pub trait RoomManagementService: Send + Sync {
    /// Create a new, available room
    async fn create_room(&self, room_type: RoomType) -> ServiceResult<Room>;

    /// Book a room; fails if it is already booked
    async fn book_room(&self, id: RoomId) -> ServiceResult<Room>;

    /// Release a room; releasing an available room is fine
    async fn release_room(&self, id: RoomId) -> ServiceResult<Room>;

    async fn is_room_available(&self, id: RoomId) -> ServiceResult<bool>;

    async fn list_rooms(&self) -> ServiceResult<Vec<Room>>;

    async fn list_available_by_type(&self, room_type: RoomType) -> ServiceResult<Vec<Room>>;

    async fn list_booked(&self) -> ServiceResult<Vec<Room>>;
}

pub struct RoomManagementServiceImpl {
    rooms: Arc<dyn RoomRepositoryPort>,
    lock: SchedulingLock,
}

impl RoomManagementServiceImpl {
    pub fn new(rooms: Arc<dyn RoomRepositoryPort>, lock: SchedulingLock) -> Self {
        Self { rooms, lock }
    }

    async fn load(&self, id: RoomId) -> ServiceResult<Room> {
        self.rooms
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Room", id))
    }
}

#[async_trait]
impl RoomManagementService for RoomManagementServiceImpl {
    #[instrument(skip(self))]
    async fn create_room(&self, room_type: RoomType) -> ServiceResult<Room> {
        let room = Room::new(room_type);
        self.rooms.save(&room).await?;
        info!(room_id = %room.id(), %room_type, "Created room");
        Ok(room)
    }

    #[instrument(skip(self))]
    async fn book_room(&self, id: RoomId) -> ServiceResult<Room> {
        let _guard = self.lock.acquire().await;
        let mut room = self.load(id).await?;
        room.book()?;
        self.rooms.save(&room).await?;
        info!(room_id = %id, "Booked room");
        Ok(room)
    }

    #[instrument(skip(self))]
    async fn release_room(&self, id: RoomId) -> ServiceResult<Room> {
        let _guard = self.lock.acquire().await;
        let mut room = self.load(id).await?;
        room.release();
        self.rooms.save(&room).await?;
        info!(room_id = %id, "Released room");
        Ok(room)
    }

    #[instrument(skip(self))]
    async fn is_room_available(&self, id: RoomId) -> ServiceResult<bool> {
        Ok(self.load(id).await?.is_available())
    }

    async fn list_rooms(&self) -> ServiceResult<Vec<Room>> {
        Ok(self.rooms.find_all().await?)
    }

    #[instrument(skip(self))]
    async fn list_available_by_type(&self, room_type: RoomType) -> ServiceResult<Vec<Room>> {
        let rooms = self.rooms.find_available_by_type(room_type).await?;
        debug!(count = rooms.len(), "Available rooms");
        Ok(rooms)
    }

    async fn list_booked(&self) -> ServiceResult<Vec<Room>> {
        let rooms = self.rooms.find_all().await?;
        Ok(rooms.into_iter().filter(Room::is_booked).collect())
    }
}

/// Undo a booking after the activity that needed the room could not be
/// stored. Returns the error to hand back to the caller.
pub(crate) async fn release_after_failed_save(
    rooms: &dyn RoomRepositoryPort,
    mut room: Room,
    operation: &'static str,
    cause: RepositoryError,
) -> ServiceError {
    room.release();
    match rooms.save(&room).await {
        Ok(()) => {
            warn!(room_id = %room.id(), operation, error = %cause, "Save failed, room released again");
            ServiceError::Repository(cause)
        }
        Err(compensation) => {
            warn!(
                room_id = %room.id(),
                operation,
                error = %cause,
                compensation_error = %compensation,
                "Save failed and room could not be released"
            );
            ServiceError::PartialWrite {
                operation,
                cause,
                compensation,
            }
        }
    }
}
