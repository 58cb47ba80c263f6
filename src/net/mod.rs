//! Networking modules for the property REST endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls behind the `PropertyApi` seam and `types` defines
//! the shared wire schema.

pub mod api;
pub mod types;
