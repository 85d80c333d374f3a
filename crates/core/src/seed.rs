//! Seed fixture schema and loader
//!
//! Defines the TOML-parseable format for the startup directory and message
//! data. A default fixture is embedded in the binary; an alternate file can
//! be supplied for demos and tests.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{Contact, Message};
use crate::registry::DirectoryRegistry;
use crate::store::MessageStore;

const DEFAULT_SEED: &str = include_str!("../assets/default_seed.toml");

/// Seed data loaded from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    #[serde(rename = "contact")]
    pub contacts: Vec<SeedContact>,
}

/// One directory entry with its initial notes-to-self
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedContact {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub color: String,
    #[serde(default)]
    pub messages: Vec<String>,
}

impl Seed {
    /// Parse seed data from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load seed data from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        tracing::info!(path = %path.display(), "Loaded seed file");
        Self::from_toml(&content)
    }

    /// The embedded demo fixture
    pub fn default_fixture() -> Result<Self> {
        Self::from_toml(DEFAULT_SEED)
    }

    /// Build the directory registry and seeded message store
    ///
    /// Seed messages are addressed from each contact to itself. Timestamps
    /// are backdated from list position so earlier contacts and earlier
    /// messages sort first; the exact values are fixture data, not a
    /// contract.
    pub fn build(self) -> Result<(DirectoryRegistry, MessageStore)> {
        let now = chrono::Utc::now().timestamp_millis();
        let contact_count = self.contacts.len() as i64;

        let mut contacts = Vec::with_capacity(self.contacts.len());
        let mut messages = Vec::new();

        for (contact_index, entry) in self.contacts.into_iter().enumerate() {
            let message_count = entry.messages.len() as i64;
            for (message_index, text) in entry.messages.iter().enumerate() {
                let text = text.trim();
                if text.is_empty() {
                    return Err(Error::EmptyText);
                }

                let timestamp = now
                    - (contact_count - contact_index as i64 + 1) * 1_000_000
                    - (message_count - message_index as i64 + 1) * 10_000;
                messages.push(Message::new(text, entry.id.clone(), entry.id.clone(), timestamp));
            }

            contacts.push(Contact::new(entry.id, entry.name, entry.icon, entry.color));
        }

        let registry = DirectoryRegistry::new(contacts)?;
        for message in &messages {
            if !registry.contains(&message.sender_id) {
                return Err(Error::UnknownContact(message.sender_id.clone()));
            }
        }

        Ok((registry, MessageStore::seeded(messages)))
    }
}
