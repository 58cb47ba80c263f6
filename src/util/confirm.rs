//! Blocking yes/no confirmation before destructive actions.
//!
//! TRADE-OFFS
//! ==========
//! The browser prompt blocks the event loop until answered. Outside a browser
//! build there is nobody to ask, so the answer is always "no" and nothing
//! destructive runs.

#[cfg(test)]
#[path = "confirm_test.rs"]
mod confirm_test;

pub const DELETE_CONFIRM_MESSAGE: &str =
    "Are you sure you want to delete this property? This action cannot be undone.";

/// Source of user confirmation for destructive operations.
pub trait Confirm {
    /// Ask the user and return `true` only on an explicit yes.
    fn confirm(&self, message: &str) -> bool;
}

/// Confirmation through `window.confirm`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserConfirm;

impl Confirm for BrowserConfirm {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            web_sys::window()
                .and_then(|w| w.confirm_with_message(message).ok())
                .unwrap_or(false)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = message;
            false
        }
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}
