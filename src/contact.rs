use std::{sync::LazyLock, time::Duration};

use regex::Regex;
use thiserror::Error;

pub const SEND_DELAY: Duration = Duration::from_millis(1500);
pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern should compile")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields")]
    MissingField(Field),
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// A form that passed validation, with every field trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn validate(&self) -> Result<Submission, ContactError> {
        if let Some(missing) = Field::ALL
            .into_iter()
            .find(|f| self.field(*f).trim().is_empty())
        {
            return Err(ContactError::MissingField(missing));
        }
        let email = self.email.trim();
        if !EMAIL_RE.is_match(email) {
            return Err(ContactError::InvalidEmail);
        }
        Ok(Submission {
            name: self.name.trim().to_string(),
            email: email.to_string(),
            subject: self.subject.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's talk".to_string(),
        }
    }

    #[test]
    fn test_valid_form_is_trimmed() {
        let submission = filled().validate().expect("form should validate");
        assert_eq!(submission.name, "Ada");
        assert_eq!(submission.email, "ada@example.com");
    }

    #[test]
    fn test_missing_fields() {
        let mut form = filled();
        form.name = String::new();
        assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Name)));

        let mut form = filled();
        form.message = "   ".to_string();
        let err = form.validate().unwrap_err();
        assert_eq!(err, ContactError::MissingField(Field::Message));
        assert_eq!(err.to_string(), "Please fill in all fields");
    }

    #[test]
    fn test_email_shape() {
        for bad in ["ada", "ada@example", "a da@example.com", "@example.com", "ada@@x.io"] {
            let mut form = filled();
            form.email = bad.to_string();
            assert_eq!(form.validate(), Err(ContactError::InvalidEmail), "{bad}");
        }
        let mut form = filled();
        form.email = "  ada.b@sub.example.co  ".to_string();
        assert!(form.validate().is_ok());
        assert_eq!(
            ContactError::InvalidEmail.to_string(),
            "Please enter a valid email address"
        );
    }

    #[test]
    fn test_clear() {
        let mut form = filled();
        form.set(Field::Subject, "Changed".to_string());
        assert_eq!(form.field(Field::Subject), "Changed");
        form.clear();
        assert_eq!(form, ContactForm::default());
    }
}
