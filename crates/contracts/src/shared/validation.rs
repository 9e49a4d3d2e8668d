use thiserror::Error;

/// Validation failure of a landing page form.
/// The display text is the message shown in the error toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError<F> {
    #[error("Preencha todos os campos obrigatórios.")]
    MissingFields(Vec<F>),
    #[error("Digite um e-mail válido.")]
    InvalidEmail(F),
}

impl<F: Clone> ValidationError<F> {
    /// Fields to mark as invalid
    pub fn fields(&self) -> Vec<F> {
        match self {
            ValidationError::MissingFields(fields) => fields.clone(),
            ValidationError::InvalidEmail(field) => vec![field.clone()],
        }
    }
}

/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
