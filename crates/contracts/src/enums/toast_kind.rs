use serde::{Deserialize, Serialize};

/// Visual flavour of a toast notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

impl ToastKind {
    pub fn code(&self) -> &'static str {
        match self {
            ToastKind::Success => "success",
            ToastKind::Error => "error",
        }
    }

    /// Full class list of the notification container
    pub fn css_class(&self) -> String {
        format!("notification notification-{}", self.code())
    }
}
