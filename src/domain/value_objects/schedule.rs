//! Scheduled time helpers
//!
//! Activities are scheduled on the local wall clock without a time zone.

use chrono::NaiveDateTime;

use crate::domain::errors::DomainError;

/// Point in time an activity is scheduled for
pub type ScheduledTime = NaiveDateTime;

const ACCEPTED_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse `YYYY-MM-DD HH:MM`, `YYYY-MM-DD HH:MM:SS` or ISO-8601 `YYYY-MM-DDTHH:MM:SS[.f]`
pub fn parse_scheduled_time(input: &str) -> Result<ScheduledTime, DomainError> {
    let input = input.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
        .or_else(|| input.parse::<NaiveDateTime>().ok())
        .ok_or_else(|| {
            DomainError::validation(format!(
                "Invalid scheduled time '{}', expected YYYY-MM-DD HH:MM",
                input
            ))
        })
}

/// Human-readable `YYYY-MM-DD HH:MM` rendering
pub fn format_scheduled_time(time: &ScheduledTime) -> String {
    time.format("%Y-%m-%d %H:%M").to_string()
}
