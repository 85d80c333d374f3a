//! In-memory message store
//!
//! Holds the authoritative ordered collection of messages and provides the
//! query/mutation operations consumed by the presentation layer. The
//! collection is re-sorted after every mutation, so readers always observe
//! ascending timestamp order.

use uuid::Uuid;

use crate::invariants;
use crate::models::Message;

/// The mutable ordered collection of all messages
///
/// The store exclusively owns its message records; consumers receive
/// borrowed views only. Validation happens before messages reach the store
/// (see `MessageDraft::compose`), so none of its operations can fail.
#[derive(Debug, Default)]
pub struct MessageStore {
    messages: Vec<Message>,
}

impl MessageStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from seed data, sorting it on entry
    pub fn seeded(mut messages: Vec<Message>) -> Self {
        messages.sort_by_key(|m| m.timestamp);
        invariants::assert_store_ordered(&messages);
        Self { messages }
    }

    /// Insert a message and return the updated ordered collection
    ///
    /// Duplicate timestamps are not an error; the sort is stable, so ties
    /// keep relative insertion order. Repeated adds always create distinct
    /// entries since every message carries a unique id.
    pub fn add(&mut self, message: Message) -> &[Message] {
        invariants::assert_message_invariants(&message);
        tracing::debug!(
            message_id = %message.id,
            sender_id = %message.sender_id,
            recipient_id = %message.recipient_id,
            "Adding message"
        );

        self.messages.push(message);
        self.messages.sort_by_key(|m| m.timestamp);
        &self.messages
    }

    /// Remove the message with the given id and return the updated collection
    ///
    /// A missing id is a silent no-op: duplicate delete taps must not fault.
    pub fn delete(&mut self, message_id: Uuid) -> &[Message] {
        let before = self.messages.len();
        self.messages.retain(|m| m.id != message_id);

        if self.messages.len() == before {
            tracing::debug!(%message_id, "Delete of unknown message ignored");
        } else {
            tracing::debug!(%message_id, "Deleted message");
        }
        &self.messages
    }

    /// Messages where the given directory id is sender or recipient
    ///
    /// Lazy and restartable: call again for a fresh pass. Ascending by
    /// timestamp, since the backing collection is always sorted.
    pub fn query<'a>(&'a self, directory_id: &'a str) -> impl Iterator<Item = &'a Message> + 'a {
        self.messages
            .iter()
            .filter(move |m| m.sender_id == directory_id || m.recipient_id == directory_id)
    }

    /// The full ordered collection
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of messages visible in a directory's thread
    pub fn count_for(&self, directory_id: &str) -> usize {
        self.query(directory_id).count()
    }
}
