use crate::modules::logbook::core::decision::Decision;
use crate::modules::logbook::core::entry::{EntryId, LogEntry};
use crate::modules::logbook::core::session::SessionContext;
use crate::modules::logbook::use_cases::record_shift_change::command::RecordShiftChange;
use crate::modules::logbook::use_cases::record_shift_change::decide::decide_record_shift_change;
use crate::shared::application::errors::ApplicationError;
use crate::shared::infrastructure::entry_store::EntryStore;
use std::sync::Arc;

pub struct RecordShiftChangeHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    store: Arc<TStore>,
    session: Arc<SessionContext>,
}

impl<TStore> RecordShiftChangeHandler<TStore>
where
    TStore: EntryStore + 'static,
{
    pub fn new(store: Arc<TStore>, session: Arc<SessionContext>) -> Self {
        Self { store, session }
    }

    pub async fn handle(&self, command: RecordShiftChange) -> Result<LogEntry, ApplicationError> {
        match decide_record_shift_change(command, EntryId::mint()) {
            Decision::Accepted { entry } => {
                self.store.append(entry.clone()).await?;
                self.session
                    .set_current_operator(entry.employee_name().map(str::to_string))
                    .await;
                tracing::info!(id = %entry.id, operator = entry.description(), "shift change recorded");
                Ok(entry)
            }
            Decision::Rejected { reason } => {
                tracing::debug!(%reason, "shift change rejected");
                Err(ApplicationError::Domain(reason.to_string()))
            }
        }
    }
}
