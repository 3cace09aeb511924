//! Rank value object - Officer seniority

use std::cmp::Ordering;
use std::fmt;

use crate::domain::errors::DomainError;

/// The hierarchical rank of an officer
///
/// Seniority is decided by `level` alone. Two ranks with the same level but
/// different names are distinct values that are neither higher nor lower
/// than one another.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Rank {
    name: String,
    level: u32,
}

impl Rank {
    pub fn new(name: impl Into<String>, level: u32) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Rank name cannot be empty"));
        }
        Ok(Self { name, level })
    }

    pub fn trainee() -> Self {
        Self::well_known("Trainee", 1)
    }

    pub fn officer() -> Self {
        Self::well_known("Officer", 2)
    }

    pub fn sergeant() -> Self {
        Self::well_known("Sergeant", 3)
    }

    pub fn inspector() -> Self {
        Self::well_known("Inspector", 4)
    }

    fn well_known(name: &str, level: u32) -> Self {
        Self {
            name: name.to_string(),
            level,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn is_higher_than(&self, other: &Rank) -> bool {
        self.level > other.level
    }

    pub fn is_lower_than(&self, other: &Rank) -> bool {
        self.level < other.level
    }

    /// True if this rank's level is at or above `other`'s
    pub fn is_at_least(&self, other: &Rank) -> bool {
        self.level >= other.level
    }
}

impl Ord for Rank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.level
            .cmp(&other.level)
            .then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for Rank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (level {})", self.name, self.level)
    }
}
