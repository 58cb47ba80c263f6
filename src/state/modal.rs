//! Read-only detail modal state.

#[cfg(test)]
#[path = "modal_test.rs"]
mod modal_test;

use crate::net::types::{Property, PropertyId};

/// The property shown in the detail modal, freshly fetched from the server.
#[derive(Clone, Debug, Default)]
pub struct ModalState {
    pub property: Option<Property>,
}

impl ModalState {
    pub fn is_open(&self) -> bool {
        self.property.is_some()
    }

    /// Current target id; `None` once the modal is closed.
    pub fn target(&self) -> Option<PropertyId> {
        self.property.as_ref().map(|p| p.id)
    }

    pub fn open(&mut self, property: Property) {
        self.property = Some(property);
    }

    pub fn close(&mut self) {
        self.property = None;
    }
}
