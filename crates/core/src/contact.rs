//! Contact page form.

use serde::Deserialize;

use crate::forms::{self, FieldError};
use crate::notice::Notice;
use crate::types::Email;

/// Contact form as submitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// A contact message that passed the form checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: Email,
    pub phone: Option<String>,
    pub message: String,
}

impl ContactForm {
    /// Name, email and message are required; phone is optional.
    ///
    /// # Errors
    ///
    /// Returns the first [`FieldError`] in form order.
    pub fn validate(&self) -> Result<ContactMessage, FieldError> {
        Ok(ContactMessage {
            name: forms::required("Name", &self.name)?,
            email: forms::email("Email", &self.email)?,
            phone: forms::optional(self.phone.as_deref()),
            message: forms::required("Message", &self.message)?,
        })
    }
}

impl ContactMessage {
    #[must_use]
    pub fn sent_notice(&self) -> Notice {
        Notice::info("Message sent!", "We'll get back to you within 24 hours.")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> ContactForm {
        ContactForm {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: Some("   ".to_string()),
            message: "Do you deliver to Pune?".to_string(),
        }
    }

    #[test]
    fn test_valid_message() {
        let message = form().validate().unwrap();
        assert_eq!(message.email.as_str(), "asha@example.com");
        assert_eq!(message.phone, None);
        assert_eq!(message.sent_notice().title, "Message sent!");
    }

    #[test]
    fn test_message_required() {
        let form = ContactForm {
            message: String::new(),
            ..form()
        };
        assert_eq!(
            form.validate(),
            Err(FieldError::Missing { field: "Message" })
        );
    }

    #[test]
    fn test_email_must_have_at_sign() {
        let form = ContactForm {
            email: "asha.example.com".to_string(),
            ..form()
        };
        assert!(matches!(
            form.validate(),
            Err(FieldError::InvalidEmail { field: "Email", .. })
        ));
    }
}
