//! Record model representing a single contact.

use crate::domain::{Name, Phone};
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One contact: a name plus its phone numbers in insertion order.
///
/// Phone numbers are passed in and out as plain strings and validated on the
/// way in. Every failing operation leaves the record unchanged.
///
/// # Example
///
/// ```
/// use contact_book::Record;
///
/// let mut record = Record::new("Alice");
/// record.add_phone("1234567890").unwrap();
/// assert_eq!(record.find_phone("1234567890"), Ok(Some("1234567890")));
/// assert_eq!(record.to_string(), "Contact name: Alice, phones: 1234567890");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with no phone numbers.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Phone numbers in insertion order.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Add a phone number. Adding a number that is already present is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNumberIncorrect` if the number is malformed.
    pub fn add_phone(&mut self, phone: &str) -> ContactResult<()> {
        let phone = Phone::new(phone)?;

        if self.phones.contains(&phone) {
            tracing::debug!(contact = %self.name, phone = %phone, "Phone already present");
            return Ok(());
        }

        tracing::debug!(contact = %self.name, phone = %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove a phone number.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNumberIncorrect` if the number is malformed,
    /// or `ContactError::PhoneNumberNotFound` if it is not on this record.
    pub fn remove_phone(&mut self, phone: &str) -> ContactResult<()> {
        let phone = Phone::new(phone)?;
        let index = self.position(&phone)?;

        self.phones.remove(index);
        tracing::debug!(contact = %self.name, phone = %phone, "Phone removed");
        Ok(())
    }

    /// Replace `old_phone` with `new_phone` in place.
    ///
    /// The replacement is not checked against the other numbers on the
    /// record, so editing can leave duplicates behind.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNumberIncorrect` if either number is
    /// malformed, or `ContactError::PhoneNumberNotFound` if `old_phone` is not
    /// on this record.
    pub fn edit_phone(&mut self, old_phone: &str, new_phone: &str) -> ContactResult<()> {
        let old_phone = Phone::new(old_phone)?;
        let index = self.position(&old_phone)?;
        let new_phone = Phone::new(new_phone)?;

        tracing::debug!(
            contact = %self.name,
            old = %old_phone,
            new = %new_phone,
            "Phone edited"
        );
        self.phones[index] = new_phone;
        Ok(())
    }

    /// Return `phone` unchanged if it is on this record, `None` otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNumberIncorrect` if the number is malformed.
    pub fn find_phone<'a>(&self, phone: &'a str) -> ContactResult<Option<&'a str>> {
        let wanted = Phone::new(phone)?;
        Ok(self.phones.contains(&wanted).then_some(phone))
    }

    fn position(&self, phone: &Phone) -> ContactResult<usize> {
        self.phones.iter().position(|p| p == phone).ok_or_else(|| {
            tracing::debug!(contact = %self.name, phone = %phone, "Phone not found");
            ContactError::PhoneNumberNotFound(phone.to_string())
        })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones: Vec<&str> = self.phones.iter().map(Phone::as_str).collect();
        write!(f, "Contact name: {}, phones: {}", self.name, phones.join("; "))
    }
}
