//! Contact form messages.

use aroma_core::{ContactMessageId, Email};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::required_text;

/// Reasons a contact submission is rejected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("All fields are required")]
    MissingFields,
}

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub id: ContactMessageId,
    pub name: String,
    /// The address exactly as submitted, trimmed.
    pub email: String,
    pub message: String,
    /// Submission time.
    pub date: DateTime<Utc>,
}

impl ContactMessage {
    /// Stamp a validated draft with a fresh id and the given time.
    #[must_use]
    pub fn new(draft: ContactDraft, date: DateTime<Utc>) -> Self {
        Self {
            id: ContactMessageId::generate(),
            name: draft.name,
            email: draft.email,
            message: draft.message,
            date,
        }
    }

    /// The sender's address, if it parses as one.
    ///
    /// The form accepts any non-blank value, so replies have to check first.
    #[must_use]
    pub fn reply_address(&self) -> Option<Email> {
        Email::parse(&self.email).ok()
    }
}

/// Contact form body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewContactMessage {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A contact submission that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl NewContactMessage {
    /// Require all three fields. The email's shape is not checked.
    ///
    /// # Errors
    ///
    /// [`ContactError::MissingFields`] if any field is absent or blank.
    pub fn validate(self) -> Result<ContactDraft, ContactError> {
        let (Some(name), Some(email), Some(message)) = (
            required_text(self.name),
            required_text(self.email),
            required_text(self.message),
        ) else {
            return Err(ContactError::MissingFields);
        };

        Ok(ContactDraft {
            name,
            email,
            message,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str, message: &str) -> NewContactMessage {
        NewContactMessage {
            name: Some(name.to_string()),
            email: Some(email.to_string()),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_validate_accepts_complete_form() {
        let draft = form("Sam", " Sam@Example.com", "Do you ship abroad?")
            .validate()
            .unwrap();
        assert_eq!(draft.name, "Sam");
        assert_eq!(draft.email, "Sam@Example.com");
    }

    #[test]
    fn test_validate_requires_every_field() {
        assert_eq!(
            form("", "sam@example.com", "Hi").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            form("Sam", "  ", "Hi").validate(),
            Err(ContactError::MissingFields)
        );
        assert_eq!(
            NewContactMessage {
                message: None,
                ..form("Sam", "sam@example.com", "")
            }
            .validate(),
            Err(ContactError::MissingFields)
        );
    }

    #[test]
    fn test_validate_accepts_any_present_email() {
        let draft = form("Sam", "sam", "Hi").validate().unwrap();
        assert_eq!(draft.email, "sam");

        let message = ContactMessage::new(draft, Utc::now());
        assert_eq!(message.email, "sam");
        assert!(message.reply_address().is_none());
    }

    #[test]
    fn test_reply_address_normalizes() {
        let draft = form("Sam", "Sam@Example.com", "Hi").validate().unwrap();
        let message = ContactMessage::new(draft, Utc::now());
        assert_eq!(
            message.reply_address().unwrap().as_str(),
            "sam@example.com"
        );
    }
}
