use uuid::Uuid;
use yewdux::prelude::*;

/// Severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Something worked; green.
    Success,
    /// Something failed; red. Never blocking, never fatal.
    Error,
}

/// A single transient notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    /// Stable identity for rendering and dismissal.
    pub id: Uuid,
    /// Severity.
    pub level: ToastLevel,
    /// Human-readable text, often straight from the server.
    pub message: String,
}

/// Queue of visible toasts, oldest first.
#[derive(Default, Clone, PartialEq, Store)]
pub struct ToastState {
    /// Currently visible notifications.
    pub toasts: Vec<Toast>,
}

impl ToastState {
    /// Append a toast and return its id.
    pub fn push(&mut self, level: ToastLevel, message: impl Into<String>) -> Uuid {
        let id = Uuid::new_v4();
        self.toasts.push(Toast {
            id,
            level,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id. Unknown ids are a no-op (the toast may already
    /// have expired).
    pub fn dismiss(&mut self, id: Uuid) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

/// Show a success toast.
pub fn toast_success(dispatch: &Dispatch<ToastState>, message: impl Into<String>) {
    let message = message.into();
    dispatch.reduce_mut(move |state| {
        state.push(ToastLevel::Success, message);
    });
}

/// Show an error toast.
pub fn toast_error(dispatch: &Dispatch<ToastState>, message: impl Into<String>) {
    let message = message.into();
    dispatch.reduce_mut(move |state| {
        state.push(ToastLevel::Error, message);
    });
}
