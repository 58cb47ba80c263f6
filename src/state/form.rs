//! Create/edit form lifecycle.
//!
//! DESIGN
//! ======
//! The mode carries the edit target, so an edit form can never exist
//! without an id and a create form can never hold one.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use std::collections::HashMap;

use crate::net::types::{Property, PropertyId, PropertyPayload};
use crate::util::validation::{Field, FieldError, parse_amount, validate_field};

/// Which intent the form is open for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Hidden,
    Create,
    Edit {
        id: PropertyId,
    },
}

/// Raw text of each input, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub address: String,
    pub price: String,
    pub size: String,
    pub description: String,
}

impl FormValues {
    /// Field text for an existing property; absent values become empty.
    pub fn from_property(property: &Property) -> Self {
        Self {
            address: property.address.clone(),
            price: property.price.map(|n| n.to_string()).unwrap_or_default(),
            size: property.size.map(|n| n.to_string()).unwrap_or_default(),
            description: property.description.clone().unwrap_or_default(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Address => &self.address,
            Field::Price => &self.price,
            Field::Size => &self.size,
            Field::Description => &self.description,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Address => self.address = value,
            Field::Price => self.price = value,
            Field::Size => self.size = value,
            Field::Description => self.description = value,
        }
    }

    /// Request body: text trimmed, numbers parsed or left absent.
    pub fn to_payload(&self) -> PropertyPayload {
        PropertyPayload {
            address: self.address.trim().to_owned(),
            price: parse_amount(&self.price),
            size: parse_amount(&self.size),
            description: self.description.trim().to_owned(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct FormState {
    pub mode: FormMode,
    pub values: FormValues,
    /// Visible per-field errors.
    pub errors: HashMap<Field, FieldError>,
}

impl FormState {
    pub fn is_open(&self) -> bool {
        self.mode != FormMode::Hidden
    }

    pub fn edit_target(&self) -> Option<PropertyId> {
        match self.mode {
            FormMode::Edit { id } => Some(id),
            _ => None,
        }
    }

    /// Blank form for a new property.
    pub fn open_create(&mut self) {
        self.mode = FormMode::Create;
        self.values = FormValues::default();
        self.errors.clear();
    }

    /// Form pre-filled from a cached property.
    pub fn open_edit(&mut self, property: &Property) {
        self.mode = FormMode::Edit { id: property.id };
        self.values = FormValues::from_property(property);
        self.errors.clear();
    }

    /// Hide the form and discard values and errors.
    pub fn close(&mut self) {
        *self = Self::default();
    }

    /// Store typed text and clear that field's error only.
    pub fn set_value(&mut self, field: Field, value: String) {
        self.values.set(field, value);
        self.errors.remove(&field);
    }

    /// Validate one field and toggle its visible error. Returns validity.
    pub fn check_field(&mut self, field: Field) -> bool {
        match validate_field(field, self.values.get(field)) {
            Ok(()) => {
                self.errors.remove(&field);
                true
            }
            Err(err) => {
                self.errors.insert(field, err);
                false
            }
        }
    }

    /// Whole-form validation.
    ///
    /// Only required fields gate the result; the description is checked so
    /// its error shows, but never blocks.
    ///
    /// # Errors
    ///
    /// Returns every failing required field with its rule violation.
    pub fn validate(&mut self) -> Result<(), Vec<(Field, FieldError)>> {
        let mut failures = Vec::new();
        for field in Field::REQUIRED {
            if !self.check_field(field) {
                if let Some(err) = self.errors.get(&field) {
                    failures.push((field, err.clone()));
                }
            }
        }
        self.check_field(Field::Description);
        if failures.is_empty() { Ok(()) } else { Err(failures) }
    }
}
