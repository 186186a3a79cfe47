//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use thiserror::Error;

/// Errors raised by contact book operations.
///
/// Every operation that returns one of these leaves the record or book
/// unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    /// Phone number is not exactly 10 decimal digits
    #[error("The phone number must contain exactly 10 digits! ({0})")]
    PhoneNumberIncorrect(String),

    /// Phone number is not present on the record
    #[error("This phone not found! ({0})")]
    PhoneNumberNotFound(String),

    /// A contact with the same (case-insensitive) name is already registered
    #[error("This contact already exists! ({0})")]
    AddContactAlreadyExists(String),

    /// No contact registered under the given name
    #[error("This contact not found! ({0})")]
    ContactNotFound(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ContactError::PhoneNumberIncorrect("12345".to_string());
        assert_eq!(
            err.to_string(),
            "The phone number must contain exactly 10 digits! (12345)"
        );

        let err = ContactError::PhoneNumberNotFound("0987654321".to_string());
        assert_eq!(err.to_string(), "This phone not found! (0987654321)");

        let err = ContactError::AddContactAlreadyExists("Bob".to_string());
        assert_eq!(err.to_string(), "This contact already exists! (Bob)");

        let err = ContactError::ContactNotFound("Alice".to_string());
        assert_eq!(err.to_string(), "This contact not found! (Alice)");
    }

    #[test]
    fn test_config_error_variants() {
        let err = ConfigError::InvalidValue {
            var: "LOG_LEVEL".to_string(),
            reason: "unknown level".to_string(),
        };
        assert!(err.to_string().contains("LOG_LEVEL"));
        assert!(err.to_string().contains("unknown level"));
    }
}
