use crate::modules::logbook::core::entry::EntryId;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;

pub struct DeleteEntryHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> DeleteEntryHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, id: EntryId) -> Result<(), ApplicationError> {
        if !self.store.remove(id).await? {
            tracing::debug!(%id, "delete ignored, unknown id");
            return Err(ApplicationError::NotFound(id));
        }
        tracing::info!(%id, "entry deleted");
        Ok(())
    }
}
