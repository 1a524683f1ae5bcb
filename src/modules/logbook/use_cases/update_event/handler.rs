use crate::modules::logbook::core::decision::Decision;
use crate::modules::logbook::core::entry::LogEntry;
use crate::modules::logbook::use_cases::update_event::command::UpdateEvent;
use crate::modules::logbook::use_cases::update_event::decide::decide_update_event;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;

pub struct UpdateEventHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> UpdateEventHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    /// The entry keeps its position. An unknown id changes nothing and is
    /// reported as `NotFound`.
    pub async fn handle(&self, command: UpdateEvent) -> Result<LogEntry, ApplicationError> {
        let entry = match decide_update_event(command) {
            Decision::Accepted { entry } => entry,
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "event update rejected");
                return Err(ApplicationError::Domain(reason.to_string()));
            }
        };

        if !self.store.update(entry.clone()).await? {
            tracing::debug!(id = %entry.id, "event update ignored, unknown id");
            return Err(ApplicationError::NotFound(entry.id));
        }
        tracing::info!(id = %entry.id, identifier = entry.identifier(), "event updated");
        Ok(entry)
    }
}
