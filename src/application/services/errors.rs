//! Service errors - What callers of the application services can observe

use std::fmt;

use thiserror::Error;

use crate::application::ports::outbound::RepositoryError;
use crate::domain::value_objects::{Rank, RoomType};
use crate::domain::DomainError;

/// Caller-facing classification of a [`ServiceError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InvalidTransition,
    InsufficientRank,
    NoResourceAvailable,
    Conflict,
    Validation,
    Persistence,
    Invariant,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::NotFound => "not found",
            Self::InvalidTransition => "invalid transition",
            Self::InsufficientRank => "insufficient rank",
            Self::NoResourceAvailable => "no resource available",
            Self::Conflict => "conflict",
            Self::Validation => "validation",
            Self::Persistence => "persistence",
            Self::Invariant => "invariant",
        };
        f.write_str(label)
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    #[error("Insufficient rank: requires level {required}, officer is {actual}")]
    InsufficientRank { required: u32, actual: Rank },

    #[error("No available {0} room")]
    NoResourceAvailable(RoomType),

    #[error("Scheduling conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// A room was booked, the activity could not be stored, and releasing
    /// the room again failed too. The room is left booked.
    #[error("Partial write: {operation} failed ({cause}); compensation failed ({compensation})")]
    PartialWrite {
        operation: &'static str,
        cause: RepositoryError,
        compensation: RepositoryError,
    },
}

impl ServiceError {
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            entity,
            id: id.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::InsufficientRank { .. } => ErrorKind::InsufficientRank,
            Self::NoResourceAvailable(_) => ErrorKind::NoResourceAvailable,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::Domain(DomainError::InvalidTransition(_)) => ErrorKind::InvalidTransition,
            Self::Domain(DomainError::Validation(_)) => ErrorKind::Validation,
            Self::Domain(DomainError::RoomTypeMismatch { .. }) => ErrorKind::Invariant,
            Self::Repository(_) | Self::PartialWrite { .. } => ErrorKind::Persistence,
        }
    }

    /// True when the failed operation still left state changed behind
    pub fn mutated_state(&self) -> bool {
        matches!(self, Self::PartialWrite { .. })
    }
}
