use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
};

use crate::modules::logbook::use_cases::export_entries::handler::EXPORT_FILE_NAME;
use crate::modules::logbook::use_cases::list_entries::query::ListEntriesParams;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

pub async fn export(State(state): State<AppState>) -> impl IntoResponse {
    match state.export_entries_handler.export_all().await {
        Ok(text) => (
            [
                (header::CONTENT_TYPE, TEXT_PLAIN.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
                ),
            ],
            text,
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn print(
    State(state): State<AppState>,
    Query(params): Query<ListEntriesParams>,
) -> impl IntoResponse {
    let filter = match params.to_filter() {
        Ok(filter) => filter,
        Err(e) => return error_response(e),
    };

    match state.export_entries_handler.printable(&filter).await {
        Ok(text) => ([(header::CONTENT_TYPE, TEXT_PLAIN)], text).into_response(),
        Err(e) => error_response(e),
    }
}
