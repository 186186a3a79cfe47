//! Contact Book - demonstration entry point
//!
//! Builds an address book, exercises each record and book operation, and
//! prints the resulting contacts to stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{AddressBook, Config, ContactError, Record};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration before logging so LOG_LEVEL can drive the filter
    let config = Config::from_env()?;

    // RUST_LOG takes precedence over LOG_LEVEL
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    let mut book = AddressBook::new();

    let mut john = Record::new("John");
    john.add_phone("1234567890")?;
    john.add_phone("5555555555")?;
    book.add_record(john)?;

    let mut jane = Record::new("Jane");
    jane.add_phone("9876543210")?;
    book.add_record(jane)?;

    if let Err(e) = book.add_record(Record::new("JOHN")) {
        warn!("Rejected record: {}", e);
    }

    let john = book.find_mut("john")?;
    john.edit_phone("1234567890", "1112223333")?;
    println!("{}", john);

    match john.find_phone("5555555555")? {
        Some(phone) => println!("{}: {}", john.name(), phone),
        None => println!("{}: no such phone", john.name()),
    }

    if let Err(e) = john.add_phone("12345") {
        warn!("Rejected phone: {}", e);
    }

    println!("{}", book.find("Jane")?);

    book.delete("Jane")?;
    match book.find("Jane") {
        Err(ContactError::ContactNotFound(name)) => println!("{} deleted", name),
        Err(e) => {
            error!("Unexpected lookup failure: {}", e);
            return Err(e.into());
        }
        Ok(record) => println!("{}", record),
    }

    info!("Address book holds {} contact(s)", book.len());
    Ok(())
}
