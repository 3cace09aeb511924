//! Domain layer - Core business rules with no infrastructure dependencies
//!
//! This layer contains:
//! - Entities: Room, Officer, Detainee, Interrogation, Meeting
//! - Value Objects: identifiers, Rank, RoomType, scheduled time
//! - Errors: invariant violations raised by the entities

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::DomainError;
