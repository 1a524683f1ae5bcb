use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::logbook::core::entry::EntryId;
use crate::modules::logbook::use_cases::update_event::command::UpdateEvent;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct UpdateEventBody {
    pub id: EntryId,
    pub date: String,
    pub time: String,
    pub identifier: String,
    pub description: String,
    pub informed_to: String,
    pub employee_name: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<UpdateEventBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = UpdateEvent {
        id: body.id,
        date: body.date,
        time: body.time,
        identifier: body.identifier,
        description: body.description,
        informed_to: body.informed_to,
        employee_name: body.employee_name,
    };

    match state.update_event_handler.handle(command).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e),
    }
}
