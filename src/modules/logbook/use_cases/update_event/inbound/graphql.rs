use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::logbook::core::entry::EntryId;
use crate::modules::logbook::use_cases::update_event::command::UpdateEvent;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct UpdateEventMutation;

#[Object]
impl UpdateEventMutation {
    #[allow(clippy::too_many_arguments)]
    async fn update_event(
        &self,
        context: &Context<'_>,
        id: ID,
        date: String,
        time: String,
        identifier: String,
        description: String,
        informed_to: String,
        employee_name: Option<String>,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();
        let id: EntryId = id.parse()?;

        let entry = state
            .update_event_handler
            .handle(UpdateEvent {
                id,
                date,
                time,
                identifier,
                description,
                informed_to,
                employee_name,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(entry.id.to_string()))
    }
}
