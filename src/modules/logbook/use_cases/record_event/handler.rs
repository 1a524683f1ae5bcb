use crate::modules::logbook::core::decision::Decision;
use crate::modules::logbook::core::entry::{EntryId, LogEntry};
use crate::modules::logbook::core::session::SessionContext;
use crate::modules::logbook::use_cases::record_event::command::RecordEvent;
use crate::modules::logbook::use_cases::record_event::decide::decide_record_event;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;

pub struct RecordEventHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
    session: Arc<SessionContext>,
}

impl<TStore> RecordEventHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>, session: Arc<SessionContext>) -> Self {
        Self { store, session }
    }

    pub async fn handle(&self, mut command: RecordEvent) -> Result<LogEntry, ApplicationError> {
        if command.employee_name.is_none() {
            command.employee_name = self.session.current_operator().await;
        }

        match decide_record_event(command, EntryId::mint()) {
            Decision::Accepted { entry } => {
                self.store.append(entry.clone()).await?;
                self.session
                    .set_current_operator(entry.employee_name().map(str::to_string))
                    .await;
                tracing::info!(id = %entry.id, identifier = entry.identifier(), "event recorded");
                Ok(entry)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "event rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }
}
