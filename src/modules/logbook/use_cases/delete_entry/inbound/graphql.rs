use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::logbook::core::entry::EntryId;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteEntryMutation;

#[Object]
impl DeleteEntryMutation {
    async fn delete_entry(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let id: EntryId = id.parse()?;

        state
            .delete_entry_handler
            .handle(id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;

        Ok(true)
    }
}
