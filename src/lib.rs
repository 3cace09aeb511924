//! Precinct Engine - Scheduling core for a small police station
//!
//! Tracks officers, detainees and rooms, and schedules interrogations and
//! informant meetings so that no room ever hosts two activities at once.

pub mod application;
pub mod domain;
pub mod infrastructure;
