//! In-memory address book keyed by contact name.

use crate::domain::Name;
use crate::error::{ContactError, ContactResult};
use crate::models::Record;
use std::collections::HashMap;

/// The collection of all contacts.
///
/// Records are stored under the uppercase form of their name, so `"Bob"`,
/// `"bob"` and `"BOB"` all address the same entry. The book is a plain value:
/// construct one and pass it to whatever needs it.
///
/// # Example
///
/// ```
/// use contact_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("Bob")).unwrap();
/// assert_eq!(book.find("bob").unwrap().name().as_str(), "Bob");
/// ```
#[derive(Debug, Default)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a record.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::AddContactAlreadyExists` if a record whose name
    /// matches case-insensitively is already registered.
    pub fn add_record(&mut self, record: Record) -> ContactResult<()> {
        let key = record.name().key();

        if self.records.contains_key(&key) {
            tracing::debug!(contact = %record.name(), "Contact already exists");
            return Err(ContactError::AddContactAlreadyExists(
                record.name().as_str().to_string(),
            ));
        }

        tracing::debug!(contact = %record.name(), phones = record.phones().len(), "Contact added");
        self.records.insert(key, record);
        Ok(())
    }

    /// Look up a record by name, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::ContactNotFound` if no such record exists.
    pub fn find(&self, name: &str) -> ContactResult<&Record> {
        self.records
            .get(&Name::key_for(name))
            .ok_or_else(|| Self::not_found(name))
    }

    /// Look up a record by name for modification, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::ContactNotFound` if no such record exists.
    pub fn find_mut(&mut self, name: &str) -> ContactResult<&mut Record> {
        self.records
            .get_mut(&Name::key_for(name))
            .ok_or_else(|| Self::not_found(name))
    }

    /// Remove a record by name, ignoring case, and hand it back.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::ContactNotFound` if no such record exists.
    pub fn delete(&mut self, name: &str) -> ContactResult<Record> {
        let record = self
            .records
            .remove(&Name::key_for(name))
            .ok_or_else(|| Self::not_found(name))?;

        tracing::debug!(contact = %record.name(), "Contact deleted");
        Ok(record)
    }

    /// Number of registered records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn not_found(name: &str) -> ContactError {
        tracing::debug!(contact = %name, "Contact not found");
        ContactError::ContactNotFound(name.to_string())
    }
}
