use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use chrono::Local;
use serde::{Deserialize, Serialize};

use crate::modules::logbook::use_cases::record_event::command::RecordEvent;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct RecordEventBody {
    pub date: String,
    pub time: String,
    pub identifier: String,
    pub description: String,
    pub informed_to: String,
    pub employee_name: Option<String>,
}

#[derive(Serialize)]
pub struct RecordEventResponse {
    pub id: String,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<RecordEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = RecordEvent {
        date: body.date,
        time: body.time,
        identifier: body.identifier,
        description: body.description,
        informed_to: body.informed_to,
        employee_name: body.employee_name,
    };

    match state.record_event_handler.handle(command).await {
        Ok(entry) => (
            StatusCode::CREATED,
            Json(RecordEventResponse {
                id: entry.id.to_string(),
            }),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn form_defaults(State(state): State<AppState>) -> impl IntoResponse {
    Json(
        state
            .session
            .event_form_defaults(Local::now().naive_local())
            .await,
    )
}
