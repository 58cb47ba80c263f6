//! Utility helpers shared across client modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns and pure rules from
//! session and component logic to improve reuse and testability.

pub mod confirm;
pub mod format;
pub mod validation;
