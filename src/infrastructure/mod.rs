//! Infrastructure layer - External adapters and implementations
//!
//! This layer contains:
//! - Persistence: in-memory and JSON file adapters for the repository ports
//! - Config: Application configuration
//! - State: Shared application state

pub mod config;
pub mod persistence;
pub mod state;
