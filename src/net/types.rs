//! Wire DTOs for the property REST endpoint.
//!
//! DESIGN
//! ======
//! Field names mirror the server JSON exactly. Ids are always numeric and
//! always assigned by the server.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Server-assigned property identifier.
pub type PropertyId = i64;

/// A property as returned by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub size: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Property {
    /// Description when present and non-blank.
    pub fn description_text(&self) -> Option<&str> {
        self.description.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// Request body for create and update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropertyPayload {
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<f64>,
    #[serde(default)]
    pub description: String,
}

/// Error body shape returned on non-success statuses.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ErrorBody {
    pub message: Option<String>,
}
