use serde::{Deserialize, Serialize};

/// Kitchen order lifecycle shown on the demo kitchen screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderStatus {
    New,
    Preparing,
    Ready,
}

impl OrderStatus {
    /// Label rendered in the `.order-status` element
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::New => "Novo",
            OrderStatus::Preparing => "Preparando",
            OrderStatus::Ready => "Pronto",
        }
    }

    /// CSS modifier for the status badge
    pub fn css_class(&self) -> &'static str {
        match self {
            OrderStatus::New => "status-new",
            OrderStatus::Preparing => "status-preparing",
            OrderStatus::Ready => "status-ready",
        }
    }

    /// Caption of the action button that moves the order forward
    pub fn action_label(&self) -> &'static str {
        match self {
            OrderStatus::New => "Iniciar preparo",
            OrderStatus::Preparing => "Marcar pronto",
            OrderStatus::Ready => "Entregue",
        }
    }

    /// Next status; `None` once the order is ready
    pub fn next(&self) -> Option<Self> {
        match self {
            OrderStatus::New => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => None,
        }
    }

    pub fn all() -> Vec<OrderStatus> {
        vec![OrderStatus::New, OrderStatus::Preparing, OrderStatus::Ready]
    }

    /// Parse a label back, ignoring surrounding whitespace
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::all().into_iter().find(|s| s.label() == label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle_stops_at_ready() {
        assert_eq!(OrderStatus::New.next(), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::Preparing.next(), Some(OrderStatus::Ready));
        assert_eq!(OrderStatus::Ready.next(), None);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(OrderStatus::from_label(" Preparando "), Some(OrderStatus::Preparing));
        assert_eq!(OrderStatus::from_label("Cancelado"), None);
    }
}
