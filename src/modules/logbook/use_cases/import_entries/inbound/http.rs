use axum::{Json, extract::State, extract::rejection::StringRejection, response::IntoResponse};
use serde::Serialize;

use crate::shared::application::errors::ApplicationError;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ImportEntriesResponse {
    pub imported: usize,
}

/// The request body is the raw content of an exported `.txt` file.
pub async fn handle(
    State(state): State<AppState>,
    body: Result<String, StringRejection>,
) -> impl IntoResponse {
    let body = match body {
        Ok(text) => text,
        Err(rejection) => {
            return error_response(ApplicationError::InvalidBody(rejection.body_text()));
        }
    };

    match state.import_entries_handler.handle(&body).await {
        Ok(imported) => Json(ImportEntriesResponse { imported }).into_response(),
        Err(e) => error_response(e),
    }
}
