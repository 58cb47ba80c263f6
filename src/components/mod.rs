//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the session view from context and forward user events
//! to session operations through `SessionHandle`.

pub mod property_card;
pub mod property_form;
pub mod property_modal;
pub mod toast_stack;
