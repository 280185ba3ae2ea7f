//! In-process digest store

use super::IntegrityStore;
use crate::{Error, Result};
use parking_lot::Mutex;

/// Digest held in memory, e.g. for embedding or tests
#[derive(Debug, Default)]
pub struct MemoryStore {
    digest: Mutex<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `digest`
    pub fn with_digest(digest: impl Into<String>) -> Self {
        MemoryStore {
            digest: Mutex::new(Some(digest.into())),
        }
    }

    /// Current contents without the not-found mapping
    pub fn peek(&self) -> Option<String> {
        self.digest.lock().clone()
    }
}

impl IntegrityStore for MemoryStore {
    fn load(&self) -> Result<String> {
        let guard = self.digest.lock();
        match guard.as_deref().map(str::trim) {
            Some(d) if !d.is_empty() => Ok(d.to_string()),
            _ => Err(Error::NotFound("memory store is empty".into())),
        }
    }

    fn save(&self, digest: &str) -> Result<()> {
        *self.digest.lock() = Some(digest.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_store_not_found() {
        assert!(MemoryStore::new().load().unwrap_err().is_not_found());
    }

    #[test]
    fn test_roundtrip() {
        let store = MemoryStore::new();
        store.save("abcd").unwrap();
        assert_eq!(store.load().unwrap(), "abcd");
        assert_eq!(store.peek().as_deref(), Some("abcd"));
    }

    #[test]
    fn test_panicking_writer_leaves_store_usable() {
        use std::sync::Arc;

        let store = Arc::new(MemoryStore::new());
        let writer = Arc::clone(&store);
        let result = std::thread::spawn(move || {
            writer.save("x").unwrap();
            panic!("writer failed after saving");
        })
        .join();
        assert!(result.is_err());

        assert_eq!(store.load().unwrap(), "x");
        store.save("y").unwrap();
        assert_eq!(store.peek().as_deref(), Some("y"));
    }
}
