use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::logbook::use_cases::record_shift_change::command::RecordShiftChange;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct RecordShiftChangeMutation;

#[Object]
impl RecordShiftChangeMutation {
    async fn record_shift_change(
        &self,
        context: &Context<'_>,
        date: String,
        time: String,
        employee_name: String,
    ) -> GqlResult<ID> {
        let state = context.data_unchecked::<AppState>();

        let entry = state
            .record_shift_change_handler
            .handle(RecordShiftChange {
                date,
                time,
                employee_name,
            })
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(ID(entry.id.to_string()))
    }
}
