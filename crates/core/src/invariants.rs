//! Developer guardrails and invariants
//!
//! Debug assertions for detecting impossible states during development.
//! These checks are compiled out in release builds.

use uuid::Uuid;

use crate::models::{Contact, Message};

/// Validate that a message is well-formed
pub fn assert_message_invariants(message: &Message) {
    debug_assert!(message.id != Uuid::nil(), "Message has nil id");

    debug_assert!(
        !message.text.trim().is_empty(),
        "Message {} has empty text",
        message.id
    );

    debug_assert!(
        !message.sender_id.is_empty(),
        "Message {} has empty sender_id",
        message.id
    );

    debug_assert!(
        !message.recipient_id.is_empty(),
        "Message {} has empty recipient_id",
        message.id
    );
}

/// Validate that a message collection is sorted non-decreasing by timestamp
pub fn assert_store_ordered(messages: &[Message]) {
    debug_assert!(
        messages.windows(2).all(|w| w[0].timestamp <= w[1].timestamp),
        "Message collection is not sorted by timestamp"
    );
}

/// Validate that a contact list is a usable directory
pub fn assert_registry_invariants(contacts: &[Contact]) {
    debug_assert!(!contacts.is_empty(), "Directory has no contacts");

    for (i, contact) in contacts.iter().enumerate() {
        debug_assert!(!contact.id.is_empty(), "Contact at index {} has empty id", i);

        debug_assert!(
            contacts.iter().filter(|c| c.id == contact.id).count() == 1,
            "Duplicate contact id {}",
            contact.id
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_message(timestamp: i64) -> Message {
        Message::new("hello", "you", "home", timestamp)
    }

    #[test]
    fn test_valid_message() {
        assert_message_invariants(&make_message(100));
    }

    #[test]
    #[should_panic(expected = "empty text")]
    fn test_empty_text_detected() {
        let mut message = make_message(100);
        message.text = "   ".to_string();
        assert_message_invariants(&message);
    }

    #[test]
    fn test_sorted_collection() {
        let messages = vec![make_message(1), make_message(1), make_message(2)];
        assert_store_ordered(&messages);
        assert_store_ordered(&[]);
    }

    #[test]
    #[should_panic(expected = "not sorted")]
    fn test_unsorted_collection_detected() {
        let messages = vec![make_message(2), make_message(1)];
        assert_store_ordered(&messages);
    }

    #[test]
    fn test_valid_directory() {
        let contacts = vec![
            Contact::new("you", "Vin", "*", "#FF6347"),
            Contact::new("home", "Brain", "#", "#87CEEB"),
        ];
        assert_registry_invariants(&contacts);
    }

    #[test]
    #[should_panic(expected = "Duplicate contact id")]
    fn test_duplicate_contact_detected() {
        let contacts = vec![
            Contact::new("you", "Vin", "*", "#FF6347"),
            Contact::new("you", "Other", "#", "#87CEEB"),
        ];
        assert_registry_invariants(&contacts);
    }
}
