//! Transient notification queue.
//!
//! DESIGN
//! ======
//! The queue only tracks which toasts are visible. Expiry timers belong to
//! the rendering layer, which calls `dismiss` when one fires; a click calls
//! the same `dismiss`, so whichever comes first wins and the other is a no-op.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub type ToastId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class.
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Icon font glyph name.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Info => "info-circle",
            Self::Success => "check-circle",
            Self::Error => "exclamation-circle",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub kind: ToastKind,
}

#[derive(Clone, Debug, Default)]
pub struct ToastState {
    pub items: Vec<Toast>,
    next_id: ToastId,
}

impl ToastState {
    /// Append a toast and return its id. Ids are never reused.
    pub fn push(&mut self, message: impl Into<String>, kind: ToastKind) -> ToastId {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Toast { id, message: message.into(), kind });
        id
    }

    /// Remove one toast. Returns `false` if it was already gone.
    pub fn dismiss(&mut self, id: ToastId) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }

    /// Highest id handed out so far.
    pub fn last_id(&self) -> ToastId {
        self.next_id
    }
}
