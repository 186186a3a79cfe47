//! Contact storage.
//!
//! The [`AddressBook`] owns every registered [`Record`](crate::models::Record)
//! and looks them up by case-insensitive name.

pub mod address_book;

pub use address_book::AddressBook;
