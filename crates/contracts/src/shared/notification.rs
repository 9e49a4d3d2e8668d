//! Single-slot toast model.
//!
//! Only one toast is shown at a time. Timers fired for a toast that has
//! since been replaced carry a stale id and change nothing.

use crate::enums::ToastKind;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    Visible,
    /// Slide-out animation is running; removal follows
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub message: String,
    pub kind: ToastKind,
    pub phase: ToastPhase,
}

impl Toast {
    pub fn css_class(&self) -> String {
        match self.phase {
            ToastPhase::Visible => self.kind.css_class(),
            ToastPhase::Leaving => format!("{} notification-leaving", self.kind.css_class()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastSlot {
    current: Option<Toast>,
}

impl ToastSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    /// Show a toast, replacing whatever is on screen
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) -> Uuid {
        let id = Uuid::new_v4();
        self.current = Some(Toast {
            id,
            message: message.into(),
            kind,
            phase: ToastPhase::Visible,
        });
        id
    }

    /// Start the exit animation of toast `id` if it is still visible
    pub fn begin_dismiss(&mut self, id: Uuid) -> bool {
        match self.current.as_mut() {
            Some(toast) if toast.id == id && toast.phase == ToastPhase::Visible => {
                toast.phase = ToastPhase::Leaving;
                true
            }
            _ => false,
        }
    }

    /// Drop toast `id` if it is still the current one
    pub fn remove(&mut self, id: Uuid) -> bool {
        if self.current.as_ref().map(|t| t.id) == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
