//! Directory registry - the fixed list of contacts available for addressing
//!
//! The registry is built once at startup from seed data and provides lookup
//! methods for the store's consumers. It is never mutated afterwards.

use crate::error::{Error, Result};
use crate::invariants;
use crate::models::Contact;

/// Fixed, ordered directory of contacts
#[derive(Debug, Clone)]
pub struct DirectoryRegistry {
    contacts: Vec<Contact>,
}

impl DirectoryRegistry {
    /// Build a registry, validating the fixed-directory invariants
    pub fn new(contacts: Vec<Contact>) -> Result<Self> {
        if contacts.is_empty() {
            return Err(Error::EmptyDirectory);
        }

        for (i, contact) in contacts.iter().enumerate() {
            if contacts[..i].iter().any(|c| c.id == contact.id) {
                return Err(Error::DuplicateContact(contact.id.clone()));
            }
            tracing::debug!(contact_id = %contact.id, name = %contact.name, "Registered contact");
        }

        invariants::assert_registry_invariants(&contacts);
        Ok(Self { contacts })
    }

    /// Get a contact by id
    pub fn get(&self, id: &str) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    /// Check whether an id belongs to the directory
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display name for an id
    pub fn name_of(&self, id: &str) -> Option<&str> {
        self.get(id).map(|c| c.name.as_str())
    }

    /// All contacts in startup order (grid order)
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(id: &str, name: &str) -> Contact {
        Contact::new(id, name, "*", "#6A5ACD")
    }

    #[test]
    fn test_lookup() {
        let registry =
            DirectoryRegistry::new(vec![contact("you", "Vin"), contact("home", "Brain")]).unwrap();

        assert_eq!(registry.len(), 2);
        assert!(registry.contains("you"));
        assert!(!registry.contains("love"));
        assert_eq!(registry.name_of("home"), Some("Brain"));
        assert_eq!(registry.get("love"), None);
    }

    #[test]
    fn test_list_keeps_startup_order() {
        let registry = DirectoryRegistry::new(vec![
            contact("b", "B"),
            contact("a", "A"),
            contact("c", "C"),
        ])
        .unwrap();

        let ids: Vec<&str> = registry.list().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_rejects_empty_directory() {
        let err = DirectoryRegistry::new(Vec::new());
        assert!(matches!(err, Err(Error::EmptyDirectory)));
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let err = DirectoryRegistry::new(vec![contact("you", "Vin"), contact("you", "Other")]);
        assert!(matches!(err, Err(Error::DuplicateContact(id)) if id == "you"));
    }
}
