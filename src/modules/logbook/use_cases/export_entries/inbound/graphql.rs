use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::logbook::use_cases::list_entries::query::ListEntriesParams;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct ExportEntriesQuery;

#[Object]
impl ExportEntriesQuery {
    async fn export_entries(&self, context: &Context<'_>) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        state
            .export_entries_handler
            .export_all()
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }

    async fn print_entries(
        &self,
        context: &Context<'_>,
        identifier: Option<String>,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> GqlResult<String> {
        let state = context.data_unchecked::<AppState>();
        let filter = ListEntriesParams {
            identifier,
            start_date,
            end_date,
        }
        .to_filter()
        .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        state
            .export_entries_handler
            .printable(&filter)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))
    }
}
