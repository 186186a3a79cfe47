//! Contact Book - an in-memory contact directory with validated phone numbers.
//!
//! # Architecture
//!
//! - **domain**: Value objects for contact fields (`Name`, `Phone`)
//! - **models**: The `Record` type holding one contact's name and phones
//! - **book**: The `AddressBook` mapping names to records
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use book::AddressBook;
pub use config::Config;
pub use domain::{Field, Name, Phone};
pub use error::{ConfigError, ContactError, ContactResult};
pub use models::Record;
