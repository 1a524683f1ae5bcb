// Export of the whole logbook and the printable view of a filtered subset.
// Both produce the import format, one line per entry, in store order.

use crate::modules::logbook::core::codec::encode;
use crate::modules::logbook::core::filter::EntryFilter;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;

pub const EXPORT_FILE_NAME: &str = "eventos.txt";

pub struct ExportEntriesHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ExportEntriesHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn export_all(&self) -> Result<String, ApplicationError> {
        let entries = self.store.list().await?;
        tracing::info!(count = entries.len(), "logbook exported");
        Ok(encode(&entries))
    }

    pub async fn printable(&self, filter: &EntryFilter) -> Result<String, ApplicationError> {
        let entries = self.store.list().await?;
        Ok(encode(entries.iter().filter(|entry| filter.matches(entry))))
    }
}
