//! Persistence of the last accepted root digest
//!
//! A store holds exactly one digest string. Loading from a store that has
//! never been written yields [`Error::NotFound`](crate::Error::NotFound),
//! which callers treat as a first run rather than a failure.

mod file_store;
mod memory;

pub use file_store::FileStore;
pub use memory::MemoryStore;

use crate::Result;

/// Load/save access to a single persisted root digest
pub trait IntegrityStore {
    /// The stored digest, surrounding whitespace trimmed
    fn load(&self) -> Result<String>;

    /// Replace the stored digest in full
    fn save(&self, digest: &str) -> Result<()>;
}
