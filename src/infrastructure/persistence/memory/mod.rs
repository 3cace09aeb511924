//! In-memory persistence adapters

mod store;

pub use store::{
    InMemoryDetaineeRepository, InMemoryInterrogationRepository, InMemoryMeetingRepository,
    InMemoryOfficerRepository, InMemoryRoomRepository, InMemoryStore,
};
