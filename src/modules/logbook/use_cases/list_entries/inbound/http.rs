use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};

use crate::modules::logbook::use_cases::list_entries::query::ListEntriesParams;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<ListEntriesParams>,
) -> impl IntoResponse {
    let filter = match params.to_filter() {
        Ok(filter) => filter,
        Err(e) => return error_response(e),
    };

    match state.list_entries_handler.handle(&filter).await {
        Ok(entries) => Json(entries).into_response(),
        Err(e) => error_response(e),
    }
}
