//! Persistence adapters
//!
//! Two backends implement the repository ports: transient in-memory tables
//! and JSON collection files. Both keep rows in insertion order.

mod builder;
mod entity_table;
pub mod json;
pub mod memory;

pub use builder::RepositoryGraph;
pub use entity_table::{EntityTable, Identified};
