//! Transient notification state (success/error toasts).
//!
//! DESIGN
//! ======
//! One toast at a time: a new toast replaces the current one and bumps a
//! sequence counter so the dismiss timer started for the old toast can tell
//! it has been superseded. Emitting is fire-and-forget; nothing reads back.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Visual category of a toast.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    /// CSS modifier class for the toast container.
    pub fn css_class(self) -> &'static str {
        match self {
            ToastKind::Success => "toast toast--success",
            ToastKind::Error => "toast toast--error",
        }
    }
}

/// A single transient message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Notification state: the currently visible toast plus a replacement counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    /// Toast currently on screen, if any.
    pub current: Option<Toast>,
    /// Incremented every time a toast is shown; stale dismiss timers compare
    /// against this to avoid hiding a newer toast.
    pub seq: u64,
}

impl ToastState {
    /// Show a toast, replacing whatever is currently visible.
    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>) {
        self.seq += 1;
        self.current = Some(Toast {
            kind,
            message: message.into(),
        });
    }

    /// Dismiss the current toast if `seq` still identifies it.
    pub fn dismiss(&mut self, seq: u64) {
        if self.seq == seq {
            self.current = None;
        }
    }
}
