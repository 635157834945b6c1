//! Storage seam for the performance ledger.
//!
//! The ledger owns the format (a JSON object of counters); stores only move
//! bytes to and from durable storage. `ledger::JsonFileStore` is the
//! production implementation and `ledger::MemoryStore` backs tests and
//! embedders that keep state elsewhere.

use crate::error::LedgerError;

/// Durable backing for ledger contents.
pub trait LedgerStore: Send + Sync {
    /// Human-readable location, used in log messages.
    fn describe(&self) -> String;

    /// Read the stored contents. `Ok(None)` means nothing has been stored yet.
    fn read(&self) -> std::io::Result<Option<String>>;

    /// Replace the stored contents wholesale.
    fn write(&self, contents: &[u8]) -> Result<(), LedgerError>;
}
