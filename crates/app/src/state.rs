//! Application state management

use std::path::PathBuf;

use pigeonhole_core::{DirectoryRegistry, Message, MessageDraft, MessageStore, Result, Seed};
use uuid::Uuid;

/// Main application state
///
/// Owns the directory registry and the message store. Consumers receive this
/// by reference; all mutation funnels through `send` and `delete`.
pub struct AppState {
    registry: DirectoryRegistry,
    store: MessageStore,
}

impl AppState {
    /// Build from the embedded fixture, or from `PIGEONHOLE_SEED` if set
    pub fn from_env() -> Result<Self> {
        let seed = match std::env::var_os("PIGEONHOLE_SEED") {
            Some(path) => Seed::load(&PathBuf::from(path))?,
            None => Seed::default_fixture()?,
        };
        Self::from_seed(seed)
    }

    pub fn from_seed(seed: Seed) -> Result<Self> {
        let (registry, store) = seed.build()?;
        tracing::info!(
            contacts = registry.len(),
            messages = store.len(),
            "Seeded message store"
        );
        Ok(Self { registry, store })
    }

    pub fn registry(&self) -> &DirectoryRegistry {
        &self.registry
    }

    pub fn store(&self) -> &MessageStore {
        &self.store
    }

    /// Validate a draft and add it to the store
    ///
    /// The store never observes invalid input; validation failures come back
    /// as errors for the UI to surface as notices.
    pub fn send(&mut self, draft: MessageDraft) -> Result<()> {
        let message = draft.compose(&self.registry)?;
        self.store.add(message);
        Ok(())
    }

    /// Delete a message; unknown ids are a no-op
    pub fn delete(&mut self, message_id: Uuid) {
        self.store.delete(message_id);
    }

    /// The ordered thread for one directory entry
    pub fn thread<'a>(&'a self, directory_id: &'a str) -> Vec<&'a Message> {
        self.store.query(directory_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pigeonhole_core::Error;

    fn make_state() -> AppState {
        let toml = r##"
[[contact]]
id = "you"
name = "Vin"
icon = "*"
color = "#FF6347"
messages = ["seeded note"]

[[contact]]
id = "home"
name = "Brain"
icon = "#"
color = "#87CEEB"
"##;
        AppState::from_seed(Seed::from_toml(toml).unwrap()).unwrap()
    }

    fn draft(text: &str, sender: &str, recipient: Option<&str>) -> MessageDraft {
        MessageDraft {
            text: text.to_string(),
            sender_id: sender.to_string(),
            recipient_id: recipient.map(|r| r.to_string()),
        }
    }

    #[test]
    fn test_send_appends_to_thread() {
        let mut state = make_state();
        state.send(draft("hello", "you", Some("home"))).unwrap();

        assert_eq!(state.thread("you").len(), 2);
        assert_eq!(state.thread("home").len(), 1);
        assert_eq!(state.thread("home")[0].text, "hello");
    }

    #[test]
    fn test_send_rejects_invalid_input() {
        let mut state = make_state();

        let err = state.send(draft("   ", "you", Some("home")));
        assert!(matches!(err, Err(Error::EmptyText)));

        let err = state.send(draft("hi", "you", None));
        assert!(matches!(err, Err(Error::NoRecipient)));

        // Nothing reached the store
        assert_eq!(state.store().len(), 1);
    }

    #[test]
    fn test_delete_is_permanent_and_idempotent() {
        let mut state = make_state();
        let id = state.thread("you")[0].id;

        state.delete(id);
        assert!(state.thread("you").is_empty());

        state.delete(id);
        assert!(state.store().is_empty());
    }
}
