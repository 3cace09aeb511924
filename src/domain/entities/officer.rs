//! Officer entity - Personnel with a mutable rank

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{OfficerId, Rank};

/// A police officer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Officer {
    id: OfficerId,
    name: String,
    rank: Rank,
}

impl Officer {
    pub fn new(name: impl Into<String>, rank: Rank) -> Result<Self, DomainError> {
        Self::restore(OfficerId::new(), name, rank)
    }

    /// Rebuild an officer from stored state
    pub fn restore(id: OfficerId, name: impl Into<String>, rank: Rank) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Officer name cannot be empty"));
        }
        Ok(Self { id, name, rank })
    }

    pub fn id(&self) -> OfficerId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rank(&self) -> &Rank {
        &self.rank
    }

    /// Move to a strictly higher rank
    pub fn promote_to(&mut self, new_rank: Rank) -> Result<(), DomainError> {
        if !new_rank.is_higher_than(&self.rank) {
            return Err(DomainError::invalid_transition(format!(
                "Cannot promote {} from {} to {}: new rank must be higher",
                self.name, self.rank, new_rank
            )));
        }
        self.rank = new_rank;
        Ok(())
    }

    /// Move to a strictly lower rank
    pub fn demote_to(&mut self, new_rank: Rank) -> Result<(), DomainError> {
        if !new_rank.is_lower_than(&self.rank) {
            return Err(DomainError::invalid_transition(format!(
                "Cannot demote {} from {} to {}: new rank must be lower",
                self.name, self.rank, new_rank
            )));
        }
        self.rank = new_rank;
        Ok(())
    }
}
