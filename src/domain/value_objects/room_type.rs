//! Room type - The fixed activity category of a room

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;

/// What a room may be used for; chosen at creation and never changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoomType {
    Interrogation,
    Meeting,
    Production,
}

impl RoomType {
    pub const ALL: [RoomType; 3] = [
        RoomType::Interrogation,
        RoomType::Meeting,
        RoomType::Production,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoomType::Interrogation => "INTERROGATION",
            RoomType::Meeting => "MEETING",
            RoomType::Production => "PRODUCTION",
        }
    }
}

impl fmt::Display for RoomType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoomType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| DomainError::validation(format!("Unknown room type: {}", s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("meeting".parse::<RoomType>().unwrap(), RoomType::Meeting);
        assert_eq!(
            " Interrogation ".parse::<RoomType>().unwrap(),
            RoomType::Interrogation
        );
        assert!("kitchen".parse::<RoomType>().is_err());
    }

    #[test]
    fn test_serde_uses_upper_case() {
        let json = serde_json::to_string(&RoomType::Production).unwrap();
        assert_eq!(json, "\"PRODUCTION\"");
        let back: RoomType = serde_json::from_str("\"INTERROGATION\"").unwrap();
        assert_eq!(back, RoomType::Interrogation);
    }
}
