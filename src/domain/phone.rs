//! Phone value object.

use super::field::Field;
use crate::error::{ContactError, ContactResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Number of digits in a valid phone number.
pub const PHONE_DIGITS: usize = 10;

/// A validated phone number.
///
/// A phone number is exactly ten decimal digits (Unicode category `Nd`, so
/// `"١٢٣٤٥٦٧٨٩٠"` is as valid as `"1234567890"`) with no formatting
/// characters. Anything else is rejected at construction time.
///
/// # Example
///
/// ```
/// use contact_book::domain::Phone;
///
/// let phone = Phone::new("0501234567").unwrap();
/// assert_eq!(phone.as_str(), "0501234567");
/// assert!(Phone::new("050-123-45").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ContactError::PhoneNumberIncorrect` unless the value is
    /// exactly ten decimal digits.
    pub fn new(phone: impl Into<String>) -> ContactResult<Self> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ContactError::PhoneNumberIncorrect(phone));
        }

        Ok(Self(phone))
    }

    /// Validate phone format.
    pub fn is_valid(phone: &str) -> bool {
        phone.chars().count() == PHONE_DIGITS && phone.chars().all(is_decimal_digit)
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

fn is_decimal_digit(c: char) -> bool {
    get_general_category(c) == GeneralCategory::DecimalNumber
}

impl Field for Phone {
    fn value(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(s).map_err(serde::de::Error::custom)
    }
}

// Display support
impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
