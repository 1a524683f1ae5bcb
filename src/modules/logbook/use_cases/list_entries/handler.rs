use crate::modules::logbook::core::filter::EntryFilter;
use crate::modules::logbook::use_cases::list_entries::projection::LogEntryView;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;

pub struct ListEntriesHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> ListEntriesHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, filter: &EntryFilter) -> Result<Vec<LogEntryView>, ApplicationError> {
        let entries = self.store.list().await?;
        Ok(entries
            .iter()
            .filter(|entry| filter.matches(entry))
            .map(LogEntryView::from)
            .collect())
    }
}
