//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a contact: its
//! name and its phone numbers. Phone numbers are validated at construction
//! time so an invalid number can never be stored on a record.

pub mod field;
pub mod name;
pub mod phone;

pub use field::Field;
pub use name::Name;
pub use phone::Phone;
