use async_graphql::{EmptySubscription, MergedObject, Schema};

use crate::modules::logbook::use_cases::delete_entry::inbound::graphql::DeleteEntryMutation;
use crate::modules::logbook::use_cases::export_entries::inbound::graphql::ExportEntriesQuery;
use crate::modules::logbook::use_cases::import_entries::inbound::graphql::ImportEntriesMutation;
use crate::modules::logbook::use_cases::list_entries::inbound::graphql::ListEntriesQuery;
use crate::modules::logbook::use_cases::record_event::inbound::graphql::{
    EventFormDefaultsQuery, RecordEventMutation,
};
use crate::modules::logbook::use_cases::record_shift_change::inbound::graphql::RecordShiftChangeMutation;
use crate::modules::logbook::use_cases::update_event::inbound::graphql::UpdateEventMutation;
use crate::shell::state::AppState;

#[derive(MergedObject, Default)]
pub struct QueryRoot(ListEntriesQuery, ExportEntriesQuery, EventFormDefaultsQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(
    RecordEventMutation,
    RecordShiftChangeMutation,
    UpdateEventMutation,
    DeleteEntryMutation,
    ImportEntriesMutation,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}
