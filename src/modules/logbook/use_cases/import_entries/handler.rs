// Appends the entries of an exported text file to the logbook.
//
// Imports run one at a time: the lock spans decoding (which mints the ids)
// and the bulk append, so each file lands contiguously and in file order.

use crate::modules::logbook::core::codec::decode;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct ImportEntriesHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
    in_flight: Mutex<()>,
}

impl<TStore> ImportEntriesHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self {
            store,
            in_flight: Mutex::new(()),
        }
    }

    /// Returns how many entries were appended.
    pub async fn handle(&self, text: &str) -> Result<usize, ApplicationError> {
        let _guard = self.in_flight.lock().await;
        let entries = decode(text);
        let imported = entries.len();
        self.store.append_all(entries).await?;
        tracing::info!(imported, "entries imported");
        Ok(imported)
    }
}
