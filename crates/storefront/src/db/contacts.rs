//! Contact message store.

use std::sync::RwLock;

use chrono::Utc;

use super::RepositoryError;
use crate::models::{ContactDraft, ContactMessage};

/// Append-only contact messages.
#[derive(Debug, Default)]
pub struct ContactStore {
    messages: RwLock<Vec<ContactMessage>>,
}

impl ContactStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a validated message, stamped now.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::LockPoisoned` if the store lock is poisoned.
    pub fn submit(&self, draft: ContactDraft) -> Result<ContactMessage, RepositoryError> {
        let message = ContactMessage::new(draft, Utc::now());

        self.messages
            .write()
            .map_err(|_| RepositoryError::LockPoisoned("contact"))?
            .push(message.clone());

        Ok(message)
    }

    /// Every message, oldest first. There is no inbox endpoint, so only
    /// tests read messages back.
    #[cfg(test)]
    pub fn list(&self) -> Result<Vec<ContactMessage>, RepositoryError> {
        self.messages
            .read()
            .map(|messages| messages.clone())
            .map_err(|_| RepositoryError::LockPoisoned("contact"))
    }
}
