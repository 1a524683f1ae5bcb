use crate::modules::logbook::core::entry::{EntryId, LogEntry};
use crate::shared::infrastructure::entry_store::{EntryStore, EntryStoreError};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEntryStore {
    entries: RwLock<Vec<LogEntry>>,
    is_offline: bool,
}

impl InMemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EntryStoreError> {
        if self.is_offline {
            return Err(EntryStoreError::Backend("Entry store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EntryStore for InMemoryEntryStore {
    async fn list(&self) -> Result<Vec<LogEntry>, EntryStoreError> {
        self.ensure_online()?;
        Ok(self.entries.read().await.clone())
    }

    async fn append(&self, entry: LogEntry) -> Result<(), EntryStoreError> {
        self.ensure_online()?;
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn append_all(&self, entries: Vec<LogEntry>) -> Result<(), EntryStoreError> {
        self.ensure_online()?;
        self.entries.write().await.extend(entries);
        Ok(())
    }

    async fn update(&self, entry: LogEntry) -> Result<bool, EntryStoreError> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        match guard.iter_mut().find(|existing| existing.id == entry.id) {
            Some(existing) => {
                *existing = entry;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn remove(&self, id: EntryId) -> Result<bool, EntryStoreError> {
        self.ensure_online()?;
        let mut guard = self.entries.write().await;
        let before = guard.len();
        guard.retain(|entry| entry.id != id);
        Ok(guard.len() != before)
    }
}
