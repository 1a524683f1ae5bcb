// Port for the ordered, session-scoped logbook.
//
// Responsibilities
// - Keep entries in insertion order; appends go to the end, nothing re-sorts.
// - Replace and remove by id. An unknown id is a no-op reported as `false`.
// - Apply each call completely before any reader can observe it.

pub mod in_memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::logbook::core::entry::{EntryId, LogEntry};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EntryStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EntryStore: Send + Sync {
    async fn list(&self) -> Result<Vec<LogEntry>, EntryStoreError>;
    async fn append(&self, entry: LogEntry) -> Result<(), EntryStoreError>;
    async fn append_all(&self, entries: Vec<LogEntry>) -> Result<(), EntryStoreError>;
    async fn update(&self, entry: LogEntry) -> Result<bool, EntryStoreError>;
    async fn remove(&self, id: EntryId) -> Result<bool, EntryStoreError>;
}
