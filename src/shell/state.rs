use crate::modules::logbook::core::session::SessionContext;
use crate::modules::logbook::use_cases::delete_entry::handler::DeleteEntryHandler;
use crate::modules::logbook::use_cases::export_entries::handler::ExportEntriesHandler;
use crate::modules::logbook::use_cases::import_entries::handler::ImportEntriesHandler;
use crate::modules::logbook::use_cases::list_entries::handler::ListEntriesHandler;
use crate::modules::logbook::use_cases::record_event::handler::RecordEventHandler;
use crate::modules::logbook::use_cases::record_shift_change::handler::RecordShiftChangeHandler;
use crate::modules::logbook::use_cases::update_event::handler::UpdateEventHandler;
use crate::shared::infrastructure::entry_store::in_memory::InMemoryEntryStore;
use std::sync::Arc;

/// One logbook session: a single store, a single current operator.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<InMemoryEntryStore>,
    pub session: Arc<SessionContext>,
    pub record_event_handler: Arc<RecordEventHandler<InMemoryEntryStore>>,
    pub record_shift_change_handler: Arc<RecordShiftChangeHandler<InMemoryEntryStore>>,
    pub update_event_handler: Arc<UpdateEventHandler<InMemoryEntryStore>>,
    pub delete_entry_handler: Arc<DeleteEntryHandler<InMemoryEntryStore>>,
    pub list_entries_handler: Arc<ListEntriesHandler<InMemoryEntryStore>>,
    pub export_entries_handler: Arc<ExportEntriesHandler<InMemoryEntryStore>>,
    pub import_entries_handler: Arc<ImportEntriesHandler<InMemoryEntryStore>>,
}

impl AppState {
    pub fn in_memory() -> Self {
        Self::with_store(InMemoryEntryStore::new())
    }

    pub fn with_store(store: InMemoryEntryStore) -> Self {
        let store = Arc::new(store);
        let session = Arc::new(SessionContext::new());

        Self {
            record_event_handler: Arc::new(RecordEventHandler::new(store.clone(), session.clone())),
            record_shift_change_handler: Arc::new(RecordShiftChangeHandler::new(
                store.clone(),
                session.clone(),
            )),
            update_event_handler: Arc::new(UpdateEventHandler::new(store.clone())),
            delete_entry_handler: Arc::new(DeleteEntryHandler::new(store.clone())),
            list_entries_handler: Arc::new(ListEntriesHandler::new(store.clone())),
            export_entries_handler: Arc::new(ExportEntriesHandler::new(store.clone())),
            import_entries_handler: Arc::new(ImportEntriesHandler::new(store.clone())),
            store,
            session,
        }
    }
}
