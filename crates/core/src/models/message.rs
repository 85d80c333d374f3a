//! Message model for contact threads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Error, Result};
use crate::registry::DirectoryRegistry;

/// A message between two contacts
///
/// Sender and recipient are fixed at creation; messages are never edited,
/// only deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub text: String,
    pub sender_id: String,
    pub recipient_id: String,
    /// Creation-order marker in Unix milliseconds
    pub timestamp: i64,
}

impl Message {
    pub fn new(
        text: impl Into<String>,
        sender_id: impl Into<String>,
        recipient_id: impl Into<String>,
        timestamp: i64,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            sender_id: sender_id.into(),
            recipient_id: recipient_id.into(),
            timestamp,
        }
    }

    /// Sender and recipient are the same contact
    pub fn is_note_to_self(&self) -> bool {
        self.sender_id == self.recipient_id
    }

    pub fn format_timestamp(&self) -> String {
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
            .map(|t| t.format("%H:%M").to_string())
            .unwrap_or_default()
    }
}

/// Raw user input before validation
///
/// `compose` is the validation boundary: the store never observes empty
/// text, a missing recipient, or an id that is not in the directory.
#[derive(Debug, Clone, Default)]
pub struct MessageDraft {
    pub text: String,
    pub sender_id: String,
    pub recipient_id: Option<String>,
}

impl MessageDraft {
    /// Validate the draft against the directory and turn it into a message
    ///
    /// Trims the text, stamps the current time, and assigns a fresh id.
    pub fn compose(self, directory: &DirectoryRegistry) -> Result<Message> {
        let text = self.text.trim();
        if text.is_empty() {
            return Err(Error::EmptyText);
        }

        let recipient_id = self.recipient_id.ok_or(Error::NoRecipient)?;

        if !directory.contains(&self.sender_id) {
            return Err(Error::UnknownContact(self.sender_id));
        }
        if !directory.contains(&recipient_id) {
            return Err(Error::UnknownContact(recipient_id));
        }

        Ok(Message::new(
            text,
            self.sender_id,
            recipient_id,
            Utc::now().timestamp_millis(),
        ))
    }
}
