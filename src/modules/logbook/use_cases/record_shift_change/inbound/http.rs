use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::logbook::use_cases::record_shift_change::command::RecordShiftChange;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordShiftChangeBody {
    pub date: String,
    pub time: String,
    pub employee_name: String,
}

#[derive(Serialize)]
pub struct RecordShiftChangeResponse {
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordShiftChangeBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RecordShiftChange {
        date: body.date,
        time: body.time,
        employee_name: body.employee_name,
    };

    match state.record_shift_change_handler.handle(command).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(RecordShiftChangeResponse {
                id: entry.id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
