//! Data models for contact book entities.
//!
//! This module contains the record type that groups a contact's name with
//! its phone numbers.

pub mod record;

pub use record::Record;
