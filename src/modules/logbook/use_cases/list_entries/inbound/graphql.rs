use async_graphql::{Context, Object, Result as GqlResult, SimpleObject};

use crate::modules::logbook::use_cases::list_entries::projection::{EntryType, LogEntryView};
use crate::modules::logbook::use_cases::list_entries::query::ListEntriesParams;
use crate::shell::state::AppState;

#[derive(SimpleObject, Clone)]
pub struct GqlLogEntry {
    pub id: String,
    pub date: String,
    pub time: String,
    pub is_shift_change: bool,
    pub identifier: String,
    pub description: String,
    pub informed_to: String,
    pub employee_name: Option<String>,
}

impl From<LogEntryView> for GqlLogEntry {
    fn from(v: LogEntryView) -> Self {
        Self {
            id: v.id,
            date: v.date,
            time: v.time,
            is_shift_change: v.entry_type == EntryType::ShiftChange,
            identifier: v.identifier,
            description: v.description,
            informed_to: v.informed_to,
            employee_name: v.employee_name,
        }
    }
}

#[derive(Default)]
pub struct ListEntriesQuery;

#[Object]
impl ListEntriesQuery {
    async fn entries(
        &self,
        context: &Context<'_>,
        identifier: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> GqlResult<Vec<GqlLogEntry>> {
        let state = context.data_unchecked::<AppState>();
        let params = ListEntriesParams {
            identifier,
            start_date,
            end_date,
        };
        let filter = params
            .to_filter()
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        let list = state
            .list_entries_handler
            .handle(&filter)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(list.into_iter().map(Into::into).collect())
    }
}
