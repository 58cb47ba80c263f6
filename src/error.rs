//! Client error taxonomy.
//!
//! Every variant is terminal for the action that raised it. Session
//! operations report the failure as a toast and also return it so callers can
//! abort dependent flows.

use crate::net::types::PropertyId;
use crate::util::validation::{Field, FieldError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClientError {
    /// Transport failure or non-success HTTP status.
    #[error("{message}")]
    Communication { status: Option<u16>, message: String },
    /// Local field rules rejected the form; nothing was sent.
    #[error("form has {} invalid field(s)", .0.len())]
    Validation(Vec<(Field, FieldError)>),
    /// The id is not in the local property cache.
    #[error("property {0} not found")]
    NotFound(PropertyId),
    /// The operation needs state that was never set up.
    #[error("{0}")]
    InternalState(&'static str),
}

impl ClientError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Communication { status: None, message: message.into() }
    }

    pub fn status(status: u16, message: impl Into<String>) -> Self {
        Self::Communication { status: Some(status), message: message.into() }
    }

    pub fn is_communication(&self) -> bool {
        matches!(self, Self::Communication { .. })
    }
}
