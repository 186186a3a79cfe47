//! Field abstraction shared by contact value objects.

use std::fmt::Display;

/// A single string-valued attribute of a contact.
///
/// Implementors wrap one string and display it verbatim. Two fields of the
/// same type are equal when their wrapped strings are equal.
pub trait Field: Display + PartialEq {
    /// The wrapped value.
    fn value(&self) -> &str;
}
