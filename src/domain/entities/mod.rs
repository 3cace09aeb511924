//! Domain entities - Core business objects with identity

mod detainee;
mod interrogation;
mod meeting;
mod officer;
mod references;
mod room;

pub use detainee::Detainee;
pub use interrogation::Interrogation;
pub use meeting::Meeting;
pub use officer::Officer;
pub use references::{DetaineeRef, OfficerRef, RoomRef};
pub use room::Room;
