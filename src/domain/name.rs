//! Name value object.

use super::field::Field;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The canonical identifier of a contact.
///
/// The name is stored exactly as given and displayed that way; lookups
/// compare names case-insensitively through [`Name::key`].
///
/// # Example
///
/// ```
/// use contact_book::domain::Name;
///
/// let name = Name::new("Alice");
/// assert_eq!(name.as_str(), "Alice");
/// assert_eq!(name.key(), "ALICE");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name. Any string is accepted.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Case-insensitive lookup key (the uppercased name).
    pub fn key(&self) -> String {
        Self::key_for(&self.0)
    }

    /// Lookup key for a raw name string.
    pub(crate) fn key_for(name: &str) -> String {
        name.to_uppercase()
    }
}

impl Field for Name {
    fn value(&self) -> &str {
        &self.0
    }
}

// Display support
impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_preserves_case() {
        let name = Name::new("McDonald");
        assert_eq!(name.as_str(), "McDonald");
        assert_eq!(format!("{}", name), "McDonald");
    }

    #[test]
    fn test_name_key_ignores_case() {
        assert_eq!(Name::new("bob").key(), Name::new("BoB").key());
        assert_eq!(Name::new("bob").key(), "BOB");
    }

    #[test]
    fn test_name_equality_is_exact() {
        assert_eq!(Name::new("Bob"), Name::new("Bob"));
        assert_ne!(Name::new("Bob"), Name::new("BOB"));
    }

    #[test]
    fn test_name_serialization() {
        let json = serde_json::to_string(&Name::new("Alice")).unwrap();
        assert_eq!(json, "\"Alice\"");

        let name: Name = serde_json::from_str("\"Alice\"").unwrap();
        assert_eq!(name.into_inner(), "Alice");
    }
}
