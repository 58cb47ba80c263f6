//! Client session: the single owner of all transient property-client state.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendering layers subscribe UI events to the methods here and re-render
//! from [`PropertySession::view`] afterwards. The session talks to the server
//! only through [`PropertyApi`] and asks for destructive confirmation only
//! through [`Confirm`], so it runs the same in a browser and in unit tests.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded and cooperative. State sits in a `RefCell` that is never
//! borrowed across an `.await`, so overlapping operations interleave freely
//! and whichever response lands last wins. There is no request ordering,
//! cancellation, or retry.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::cell::RefCell;
use std::time::Duration;

use super::form::{FormMode, FormState};
use super::modal::ModalState;
use super::properties::PropertiesState;
use super::toast::{ToastId, ToastKind, ToastState};
use super::view::SessionView;
use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::net::api::PropertyApi;
use crate::net::types::{Property, PropertyId};
use crate::util::confirm::{Confirm, DELETE_CONFIRM_MESSAGE};
use crate::util::validation::Field;

pub const COMMUNICATION_FAILED: &str = "Error communicating with the server";
pub const LOAD_FAILED: &str = "Error loading properties";
pub const DETAILS_FAILED: &str = "Error loading property details";
pub const CREATE_SUCCEEDED: &str = "Property created successfully";
pub const CREATE_FAILED: &str = "Error creating property";
pub const UPDATE_SUCCEEDED: &str = "Property updated successfully";
pub const UPDATE_FAILED: &str = "Error updating property";
pub const DELETE_SUCCEEDED: &str = "Property deleted successfully";
pub const DELETE_FAILED: &str = "Error deleting property";
pub const NOT_FOUND: &str = "Property not found";
pub const FORM_INVALID: &str = "Please fix the errors in the form";
pub const NO_DELETE_TARGET: &str = "Error: no property selected for deletion";
pub const NO_EDIT_TARGET: &str = "Error: no property selected for editing";
pub const FORM_NOT_OPEN: &str = "Error: the property form is not open";

/// Everything a session tracks between events.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub properties: PropertiesState,
    pub form: FormState,
    pub modal: ModalState,
    pub toasts: ToastState,
}

impl SessionState {
    /// Property targeted by the open detail or edit flow.
    pub fn current_property_id(&self) -> Option<PropertyId> {
        self.modal.target().or_else(|| self.form.edit_target())
    }
}

pub struct PropertySession<A, C> {
    api: A,
    confirm: C,
    config: ClientConfig,
    state: RefCell<SessionState>,
}

impl<A: PropertyApi, C: Confirm> PropertySession<A, C> {
    pub fn new(api: A, confirm: C, config: ClientConfig) -> Self {
        Self { api, confirm, config, state: RefCell::new(SessionState::default()) }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn toast_ttl(&self) -> Duration {
        self.config.toast_ttl
    }

    /// Display-ready projection of the current state.
    pub fn view(&self) -> SessionView {
        SessionView::build(&self.state.borrow(), self.config.locale)
    }

    /// Read access to the raw state.
    pub fn with_state<R>(&self, f: impl FnOnce(&SessionState) -> R) -> R {
        f(&self.state.borrow())
    }

    fn update<R>(&self, f: impl FnOnce(&mut SessionState) -> R) -> R {
        f(&mut self.state.borrow_mut())
    }

    // =============================================================
    // Notifications
    // =============================================================

    /// Show a toast. The caller's renderer expires it after [`Self::toast_ttl`].
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.update(|s| s.toasts.push(message, kind))
    }

    /// Remove a toast, by click or by expiry. Returns `false` if already gone.
    pub fn dismiss(&self, id: ToastId) -> bool {
        self.update(|s| s.toasts.dismiss(id))
    }

    /// Report a remote failure: the generic communication toast plus the
    /// action-specific one.
    fn report_remote_failure(&self, action: &str, err: &ClientError, message: &str) {
        log::error!("{action} failed: {err}");
        self.update(|s| {
            s.toasts.push(COMMUNICATION_FAILED, ToastKind::Error);
            s.toasts.push(message, ToastKind::Error);
        });
    }

    fn report_internal(&self, message: &'static str) -> ClientError {
        log::warn!("{message}");
        self.notify(message, ToastKind::Error);
        ClientError::InternalState(message)
    }

    // =============================================================
    // List
    // =============================================================

    /// Fetch the full list and replace the cache.
    ///
    /// On failure the cache resets to empty.
    ///
    /// # Errors
    ///
    /// Returns the communication failure after it has been reported.
    pub async fn load(&self) -> Result<(), ClientError> {
        self.update(|s| s.properties.loading = true);
        let result = self.api.list().await;
        self.update(|s| s.properties.loading = false);

        match result {
            Ok(items) => {
                let dropped = self.update(|s| s.properties.replace_all(items));
                if dropped > 0 {
                    log::warn!("dropped {dropped} duplicate property id(s) from list response");
                }
                Ok(())
            }
            Err(err) => {
                self.update(|s| s.properties.reset());
                self.report_remote_failure("list properties", &err, LOAD_FAILED);
                Err(err)
            }
        }
    }

    // =============================================================
    // Form
    // =============================================================

    /// Open a blank create form.
    pub fn show_add(&self) {
        self.update(|s| s.form.open_create());
    }

    /// Open the edit form for a cached property.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] and leaves the form untouched when the
    /// id is not cached.
    pub fn edit(&self, id: PropertyId) -> Result<(), ClientError> {
        let opened = self.update(|s| match s.properties.find(id).cloned() {
            Some(property) => {
                s.form.open_edit(&property);
                true
            }
            None => false,
        });
        if opened {
            Ok(())
        } else {
            log::warn!("edit requested for uncached property {id}");
            self.notify(NOT_FOUND, ToastKind::Error);
            Err(ClientError::NotFound(id))
        }
    }

    /// Cancel the form, discarding values and errors.
    pub fn hide_form(&self) {
        self.update(|s| s.form.close());
    }

    /// Record typed text; clears that field's error.
    pub fn input(&self, field: Field, value: String) {
        self.update(|s| s.form.set_value(field, value));
    }

    /// Validate one field on blur. Returns validity.
    pub fn blur(&self, field: Field) -> bool {
        self.update(|s| s.form.check_field(field))
    }

    /// Validate and send the form as a create or update.
    ///
    /// Invalid forms never reach the network. On a remote failure the form
    /// stays open with its values.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`], [`ClientError::InternalState`] when
    /// the form is hidden, or the communication failure.
    pub async fn submit(&self) -> Result<(), ClientError> {
        let prepared = self.update(|s| {
            if !s.form.is_open() {
                return None;
            }
            let mode = s.form.mode;
            Some(s.form.validate().map(|()| (mode, s.form.values.to_payload())))
        });
        let (mode, payload) = match prepared {
            None => return Err(self.report_internal(FORM_NOT_OPEN)),
            Some(Ok(ready)) => ready,
            Some(Err(failures)) => {
                self.notify(FORM_INVALID, ToastKind::Error);
                return Err(ClientError::Validation(failures));
            }
        };

        match mode {
            FormMode::Hidden => Err(self.report_internal(FORM_NOT_OPEN)),
            FormMode::Create => match self.api.create(&payload).await {
                Ok(created) => {
                    log::debug!("created property {}", created.id);
                    self.update(|s| {
                        s.properties.insert(created);
                        s.form.close();
                        s.toasts.push(CREATE_SUCCEEDED, ToastKind::Success);
                    });
                    Ok(())
                }
                Err(err) => {
                    self.report_remote_failure("create property", &err, CREATE_FAILED);
                    Err(err)
                }
            },
            FormMode::Edit { id } => match self.api.update(id, &payload).await {
                Ok(updated) => {
                    log::debug!("updated property {id}");
                    self.update(|s| {
                        if !s.properties.replace(id, updated) {
                            log::warn!("updated property {id} was not cached");
                        }
                        s.form.close();
                        s.toasts.push(UPDATE_SUCCEEDED, ToastKind::Success);
                    });
                    Ok(())
                }
                Err(err) => {
                    self.report_remote_failure("update property", &err, UPDATE_FAILED);
                    Err(err)
                }
            },
        }
    }

    // =============================================================
    // Detail modal
    // =============================================================

    /// Fetch one property fresh from the server and show it in the modal.
    ///
    /// # Errors
    ///
    /// Returns the communication failure; the modal is left as it was.
    pub async fn show_details(&self, id: PropertyId) -> Result<(), ClientError> {
        match self.api.get(id).await {
            Ok(property) => {
                self.update(|s| s.modal.open(property));
                Ok(())
            }
            Err(err) => {
                self.report_remote_failure("get property", &err, DETAILS_FAILED);
                Err(err)
            }
        }
    }

    /// Close the modal and clear the current target.
    pub fn close_details(&self) {
        self.update(|s| s.modal.close());
    }

    /// Close the modal and open the edit form for its property.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InternalState`] with no target, or
    /// [`ClientError::NotFound`] when the target is not cached.
    pub fn edit_current(&self) -> Result<(), ClientError> {
        let target = self.update(|s| {
            let target = s.modal.target();
            s.modal.close();
            target
        });
        match target {
            Some(id) => self.edit(id),
            None => Err(self.report_internal(NO_EDIT_TARGET)),
        }
    }

    // =============================================================
    // Delete
    // =============================================================

    /// Delete from a list card after confirmation.
    ///
    /// Returns `Ok(false)` when the user declines; nothing is sent.
    ///
    /// # Errors
    ///
    /// Returns the communication failure; the cache is left unchanged.
    pub async fn confirm_delete(&self, id: PropertyId) -> Result<bool, ClientError> {
        if !self.confirm.confirm(DELETE_CONFIRM_MESSAGE) {
            return Ok(false);
        }
        self.delete_property(id).await.map(|()| true)
    }

    /// Delete the property shown in the modal after confirmation.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InternalState`] without sending anything when no
    /// property is targeted, or the communication failure.
    pub async fn delete_current(&self) -> Result<bool, ClientError> {
        let Some(id) = self.with_state(|s| s.modal.target()) else {
            return Err(self.report_internal(NO_DELETE_TARGET));
        };
        self.confirm_delete(id).await
    }

    async fn delete_property(&self, id: PropertyId) -> Result<(), ClientError> {
        match self.api.delete(id).await {
            Ok(()) => {
                log::debug!("deleted property {id}");
                self.update(|s| {
                    s.properties.remove(id);
                    s.toasts.push(DELETE_SUCCEEDED, ToastKind::Success);
                    s.modal.close();
                });
                Ok(())
            }
            Err(err) => {
                self.report_remote_failure("delete property", &err, DELETE_FAILED);
                Err(err)
            }
        }
    }

    /// Snapshot of the cached list, in server order.
    pub fn properties(&self) -> Vec<Property> {
        self.with_state(|s| s.properties.items.clone())
    }
}
