use std::sync::Mutex;

use super::{ItemRepository, decode, encode};
use crate::error::Result;
use crate::models::Item;

/// Holds the serialized collection in memory, as the SQLite store would.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    raw: Mutex<Option<String>>,
}

impl InMemoryItemRepository {
    /// Start from an already-serialized collection.
    pub fn with_raw(raw: impl Into<String>) -> Self {
        Self {
            raw: Mutex::new(Some(raw.into())),
        }
    }

    /// The serialized collection as currently stored.
    pub fn raw(&self) -> Option<String> {
        self.slot().clone()
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        // a poisoned lock still holds a complete string
        self.raw.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl ItemRepository for InMemoryItemRepository {
    async fn load(&self) -> Result<Option<Vec<Item>>> {
        let raw = self.slot().clone();
        raw.as_deref().map(decode).transpose()
    }

    async fn save(&self, items: &[Item]) -> Result<()> {
        let raw = encode(items)?;
        *self.slot() = Some(raw);
        Ok(())
    }

    async fn clear(&self) -> Result<bool> {
        Ok(self.slot().take().is_some())
    }
}
