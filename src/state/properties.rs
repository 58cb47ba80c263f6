//! Cached property list.
//!
//! DESIGN
//! ======
//! Mirrors the last successful fetch or mutation in server order. Ids stay
//! unique: every write path goes through an id lookup first.

#[cfg(test)]
#[path = "properties_test.rs"]
mod properties_test;

use std::collections::HashSet;

use crate::net::types::{Property, PropertyId};

#[derive(Clone, Debug, Default)]
pub struct PropertiesState {
    pub items: Vec<Property>,
    /// A list fetch is in flight.
    pub loading: bool,
    /// At least one list fetch has completed.
    pub loaded: bool,
}

impl PropertiesState {
    /// Replace the cache with a list response. Later duplicates of an id are
    /// dropped; returns how many were dropped.
    pub fn replace_all(&mut self, items: Vec<Property>) -> usize {
        let total = items.len();
        let mut seen = HashSet::with_capacity(total);
        self.items = items.into_iter().filter(|p| seen.insert(p.id)).collect();
        self.loaded = true;
        total - self.items.len()
    }

    /// Clear the cache after a failed load.
    pub fn reset(&mut self) {
        self.items.clear();
        self.loaded = true;
    }

    pub fn find(&self, id: PropertyId) -> Option<&Property> {
        self.items.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: PropertyId) -> bool {
        self.find(id).is_some()
    }

    /// Append a created property, or replace the entry already holding its id.
    pub fn insert(&mut self, property: Property) {
        if !self.replace(property.id, property.clone()) {
            self.items.push(property);
        }
    }

    /// Overwrite the entry cached under `id` in place. Returns `false` when absent.
    ///
    /// The new value may carry a different id; any other entry already holding
    /// that id is dropped so ids stay unique.
    pub fn replace(&mut self, id: PropertyId, property: Property) -> bool {
        let Some(index) = self.items.iter().position(|p| p.id == id) else {
            return false;
        };
        let new_id = property.id;
        self.items[index] = property;
        if new_id != id {
            let mut position = 0;
            self.items.retain(|p| {
                let keep = position == index || p.id != new_id;
                position += 1;
                keep
            });
        }
        true
    }
}
