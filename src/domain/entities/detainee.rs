//! Detainee entity

use crate::domain::errors::DomainError;
use crate::domain::value_objects::DetaineeId;

/// A person held in custody
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detainee {
    id: DetaineeId,
    name: String,
    crime: String,
}

impl Detainee {
    pub fn new(name: impl Into<String>, crime: impl Into<String>) -> Result<Self, DomainError> {
        Self::restore(DetaineeId::new(), name, crime)
    }

    /// Rebuild a detainee from stored state
    pub fn restore(
        id: DetaineeId,
        name: impl Into<String>,
        crime: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Detainee name cannot be empty"));
        }
        Ok(Self {
            id,
            name,
            crime: crime.into(),
        })
    }

    pub fn id(&self) -> DetaineeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn crime(&self) -> &str {
        &self.crime
    }
}
