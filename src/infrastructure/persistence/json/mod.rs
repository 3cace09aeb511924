//! JSON file persistence adapters

mod collection;
mod data_directory;
mod records;
mod store;

pub use collection::JsonCollection;
pub use data_directory::{
    DataDirectory, COLLECTIONS, DETAINEES, INTERROGATIONS, MEETINGS, OFFICERS, ROOMS,
};
pub use records::JsonEntity;
pub use store::{
    JsonDetaineeRepository, JsonInterrogationRepository, JsonMeetingRepository,
    JsonOfficerRepository, JsonRoomRepository, JsonStore,
};
