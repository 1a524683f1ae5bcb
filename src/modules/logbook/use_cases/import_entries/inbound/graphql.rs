use async_graphql::{Context, Object, Result as GqlResult};

use crate::shell::state::AppState;

#[derive(Default)]
pub struct ImportEntriesMutation;

#[Object]
impl ImportEntriesMutation {
    /// Appends the entries of an exported text file, returns how many were added.
    async fn import_entries(&self, context: &Context<'_>, text: String) -> GqlResult<u64> {
        let state = context.data_unchecked::<AppState>();
        let imported = state
            .import_entries_handler
            .handle(&text)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(imported as u64)
    }
}
