//! Insertion-ordered entity table shared by both storage backends

use crate::domain::entities::{Detainee, Interrogation, Meeting, Officer, Room};
use crate::domain::value_objects::{DetaineeId, InterrogationId, MeetingId, OfficerId, RoomId};

/// An entity with a stable identifier
pub trait Identified: Clone + Send + Sync + 'static {
    type Id: Copy + Eq + std::fmt::Display + Send + Sync + 'static;

    fn entity_id(&self) -> Self::Id;
}

macro_rules! impl_identified {
    ($entity:ty, $id:ty) => {
        impl Identified for $entity {
            type Id = $id;

            fn entity_id(&self) -> $id {
                self.id()
            }
        }
    };
}

impl_identified!(Room, RoomId);
impl_identified!(Officer, OfficerId);
impl_identified!(Detainee, DetaineeId);
impl_identified!(Interrogation, InterrogationId);
impl_identified!(Meeting, MeetingId);

/// Rows kept in the order they were first inserted.
///
/// Tables stay small, so lookups scan linearly.
#[derive(Debug, Clone)]
pub struct EntityTable<T: Identified> {
    rows: Vec<T>,
}

impl<T: Identified> Default for EntityTable<T> {
    fn default() -> Self {
        Self { rows: Vec::new() }
    }
}

impl<T: Identified> EntityTable<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from loaded rows. A repeated id keeps the first
    /// position and the last value.
    pub fn from_rows(rows: impl IntoIterator<Item = T>) -> Self {
        let mut table = Self::new();
        for row in rows {
            table.upsert(row);
        }
        table
    }

    /// Replace the row with the same id in place, or append
    pub fn upsert(&mut self, row: T) {
        let id = row.entity_id();
        match self.rows.iter_mut().find(|r| r.entity_id() == id) {
            Some(existing) => *existing = row,
            None => self.rows.push(row),
        }
    }

    pub fn get(&self, id: T::Id) -> Option<&T> {
        self.rows.iter().find(|r| r.entity_id() == id)
    }

    /// Remove a row; returns whether anything was removed
    pub fn remove(&mut self, id: T::Id) -> bool {
        let before = self.rows.len();
        self.rows.retain(|r| r.entity_id() != id);
        self.rows.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.rows.iter()
    }

    pub fn to_vec(&self) -> Vec<T> {
        self.rows.clone()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::RoomType;

    #[test]
    fn test_upsert_keeps_insertion_position() {
        let mut first = Room::new(RoomType::Interrogation);
        let second = Room::new(RoomType::Meeting);
        let mut table = EntityTable::new();
        table.upsert(first.clone());
        table.upsert(second.clone());

        first.book().unwrap();
        table.upsert(first.clone());

        let ids: Vec<_> = table.iter().map(Room::id).collect();
        assert_eq!(ids, vec![first.id(), second.id()]);
        assert!(table.get(first.id()).unwrap().is_booked());
    }

    #[test]
    fn test_from_rows_last_value_wins() {
        let room = Room::new(RoomType::Production);
        let mut booked = room.clone();
        booked.book().unwrap();

        let table = EntityTable::from_rows(vec![room.clone(), booked]);

        assert_eq!(table.len(), 1);
        assert!(table.get(room.id()).unwrap().is_booked());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut table = EntityTable::from_rows(vec![Room::new(RoomType::Meeting)]);
        assert!(!table.remove(RoomId::new()));
        assert_eq!(table.len(), 1);
    }
}
