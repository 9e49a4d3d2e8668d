//! Contact and newsletter forms. Submission is simulated locally; the
//! validated payloads only ever reach the debug log.

use crate::shared::validation::{is_blank, is_valid_email, ValidationError};
use serde::{Deserialize, Serialize};

pub const CONTACT_SUCCESS: &str = "Solicitação enviada! Entraremos em contato em breve.";
pub const NEWSLETTER_SUCCESS: &str = "Inscrição realizada com sucesso!";
pub const SENDING_LABEL: &str = "Enviando...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Restaurant,
    Plan,
}

impl ContactField {
    pub fn all() -> [ContactField; 5] {
        [
            ContactField::Name,
            ContactField::Email,
            ContactField::Phone,
            ContactField::Restaurant,
            ContactField::Plan,
        ]
    }

    /// `name`/`id` attribute of the input
    pub fn code(&self) -> &'static str {
        match self {
            ContactField::Name => "nome",
            ContactField::Email => "email",
            ContactField::Phone => "telefone",
            ContactField::Restaurant => "restaurante",
            ContactField::Plan => "plano",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ContactField::Name => "Nome",
            ContactField::Email => "E-mail",
            ContactField::Phone => "Telefone",
            ContactField::Restaurant => "Restaurante",
            ContactField::Plan => "Plano de interesse",
        }
    }
}

/// Plans offered in the contact form select
pub const PLANS: &[(&str, &str)] = &[
    ("basico", "Básico"),
    ("profissional", "Profissional"),
    ("premium", "Premium"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub restaurant: String,
    pub plan: String,
    /// Optional free text, not required
    pub message: String,
}

/// Payload of a (simulated) contact submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub restaurant: String,
    pub plan: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Restaurant => &self.restaurant,
            ContactField::Plan => &self.plan,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Restaurant => self.restaurant = value,
            ContactField::Plan => self.plan = value,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check required fields, then the e-mail format
    pub fn validate(&self) -> Result<ContactRequest, ValidationError<ContactField>> {
        let missing: Vec<ContactField> = ContactField::all()
            .into_iter()
            .filter(|f| is_blank(self.value(*f)))
            .collect();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(ValidationError::InvalidEmail(ContactField::Email));
        }
        let message = self.message.trim();
        Ok(ContactRequest {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            restaurant: self.restaurant.trim().to_string(),
            plan: self.plan.trim().to_string(),
            message: (!message.is_empty()).then(|| message.to_string()),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NewsletterEmail;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub email: String,
}

pub fn validate_newsletter(
    email: &str,
) -> Result<NewsletterSubscription, ValidationError<NewsletterEmail>> {
    let email = email.trim();
    if email.is_empty() || !is_valid_email(email) {
        return Err(ValidationError::InvalidEmail(NewsletterEmail));
    }
    Ok(NewsletterSubscription {
        email: email.to_string(),
    })
}

/// JSON rendering of a payload for the simulated submission log
pub fn payload_json<T: Serialize>(payload: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ana".to_string(),
            email: "ana@bistro.com.br".to_string(),
            phone: "(11) 99999-0000".to_string(),
            restaurant: "Bistrô da Ana".to_string(),
            plan: "profissional".to_string(),
            message: String::new(),
        }
    }

    #[test]
    fn test_empty_required_field_blocks_submit() {
        let mut form = filled();
        form.restaurant = "   ".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingFields(vec![ContactField::Restaurant]));
        assert_eq!(err.to_string(), "Preencha todos os campos obrigatórios.");
        assert_eq!(err.fields(), vec![ContactField::Restaurant]);
    }

    #[test]
    fn test_empty_form_lists_every_field() {
        let err = ContactForm::default().validate().unwrap_err();
        assert_eq!(err.fields().len(), 5);
    }

    #[test]
    fn test_malformed_email() {
        let mut form = filled();
        form.email = "ana@bistro".to_string();
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::InvalidEmail(ContactField::Email)
        );
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let mut form = filled();
        form.name = "  Ana ".to_string();
        form.message = "  ".to_string();
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Ana");
        assert_eq!(request.message, None);
        let json = payload_json(&request).unwrap();
        assert!(json.contains("\"plan\":\"profissional\""));
        assert!(!json.contains("message"));

        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn test_newsletter() {
        assert_eq!(
            validate_newsletter(" ana@bistro.com ").unwrap().email,
            "ana@bistro.com"
        );
        let err = validate_newsletter("").unwrap_err();
        assert_eq!(err.to_string(), "Digite um e-mail válido.");
        assert!(validate_newsletter("ana").is_err());
    }
}
