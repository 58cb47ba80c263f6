//! Display-ready projection of a session.
//!
//! DESIGN
//! ======
//! Every string a renderer needs is computed here, so components only lay
//! out data and forward events. Nothing in this module depends on Leptos.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use super::session::SessionState;
use super::toast::Toast;
use crate::net::types::{Property, PropertyId};
use crate::util::format::{NumberLocale, format_number_with};
use crate::util::validation::Field;

pub const ADDRESS_PLACEHOLDER: &str = "No address";
pub const EMPTY_LIST_MESSAGE: &str = "No properties registered yet.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionView {
    pub list: ListView,
    /// The list section is replaced by the form while the form is open.
    pub show_list: bool,
    pub form: Option<FormView>,
    pub modal: Option<ModalView>,
    pub toasts: Vec<Toast>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ListView {
    #[default]
    Loading,
    Empty,
    Cards(Vec<PropertyCard>),
}

#[derive(Clone, Debug, PartialEq)]
pub struct PropertyCard {
    pub id: PropertyId,
    pub title: String,
    pub address: String,
    pub price: String,
    pub size: String,
    pub description: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormView {
    pub title: &'static str,
    pub editing: bool,
    pub fields: Vec<FieldView>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldView {
    pub field: Field,
    pub label: &'static str,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ModalView {
    pub id: PropertyId,
    pub address: String,
    pub price: String,
    pub size: String,
    pub description: Option<String>,
}

impl SessionView {
    pub fn build(state: &SessionState, locale: NumberLocale) -> Self {
        Self {
            list: list_view(state, locale),
            show_list: !state.form.is_open(),
            form: form_view(state),
            modal: state.modal.property.as_ref().map(|p| modal_view(p, locale)),
            toasts: state.toasts.items.clone(),
        }
    }
}

fn address_or_placeholder(property: &Property) -> String {
    if property.address.trim().is_empty() {
        ADDRESS_PLACEHOLDER.to_owned()
    } else {
        property.address.clone()
    }
}

fn list_view(state: &SessionState, locale: NumberLocale) -> ListView {
    if state.properties.loading || !state.properties.loaded {
        return ListView::Loading;
    }
    if state.properties.items.is_empty() {
        return ListView::Empty;
    }
    ListView::Cards(state.properties.items.iter().map(|p| card(p, locale)).collect())
}

pub fn card(property: &Property, locale: NumberLocale) -> PropertyCard {
    PropertyCard {
        id: property.id,
        title: format!("Property #{}", property.id),
        address: address_or_placeholder(property),
        price: format!("${}", format_number_with(Some(property.price.unwrap_or(0.0)), locale)),
        size: format!("{} m²", format_number_with(Some(property.size.unwrap_or(0.0)), locale)),
        description: property.description_text().map(str::to_owned),
    }
}

fn modal_view(property: &Property, locale: NumberLocale) -> ModalView {
    ModalView {
        id: property.id,
        address: address_or_placeholder(property),
        price: format!("${}", format_number_with(Some(property.price.unwrap_or(0.0)), locale)),
        size: format!("{} square meters", format_number_with(Some(property.size.unwrap_or(0.0)), locale)),
        description: property.description_text().map(str::to_owned),
    }
}

fn field_label(field: Field) -> &'static str {
    match field {
        Field::Address => "Address",
        Field::Price => "Price",
        Field::Size => "Size (m²)",
        Field::Description => "Description",
    }
}

fn form_view(state: &SessionState) -> Option<FormView> {
    let form = &state.form;
    if !form.is_open() {
        return None;
    }
    let editing = form.edit_target().is_some();
    let fields = Field::ALL
        .iter()
        .map(|&field| FieldView {
            field,
            label: field_label(field),
            value: form.values.get(field).to_owned(),
            error: form.errors.get(&field).map(ToString::to_string),
        })
        .collect();
    Some(FormView {
        title: if editing { "Edit Property" } else { "New Property" },
        editing,
        fields,
    })
}
