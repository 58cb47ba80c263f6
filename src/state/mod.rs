//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`properties`, `form`, `modal`, `toast`) and
//! owned as a whole by `session`, which is the only place that mutates it.
//! `view` projects it into display-ready data.

pub mod form;
pub mod modal;
pub mod properties;
pub mod session;
pub mod toast;
pub mod view;
