use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tower_http::cors::CorsLayer;

use crate::modules::logbook::use_cases::delete_entry::inbound::http as delete_http;
use crate::modules::logbook::use_cases::export_entries::inbound::http as export_http;
use crate::modules::logbook::use_cases::import_entries::inbound::http as import_http;
use crate::modules::logbook::use_cases::list_entries::inbound::http as list_http;
use crate::modules::logbook::use_cases::record_event::inbound::http as record_event_http;
use crate::modules::logbook::use_cases::record_shift_change::inbound::http as shift_change_http;
use crate::modules::logbook::use_cases::update_event::inbound::http as update_http;
use crate::shared::application::errors::ApplicationError;
use crate::shell::state::AppState;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

pub fn error_response(error: ApplicationError) -> Response {
    let status = match &error {
        ApplicationError::Domain(_)
        | ApplicationError::InvalidQuery(_)
        | ApplicationError::InvalidBody(_) => StatusCode::BAD_REQUEST,
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::Store(_) => {
            tracing::error!(%error, "entry store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (
        status,
        Json(ErrorBody {
            error: error.to_string(),
        }),
    )
        .into_response()
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/record-event", post(record_event_http::handle))
        .route("/event-form-defaults", get(record_event_http::form_defaults))
        .route("/record-shift-change", post(shift_change_http::handle))
        .route("/update-event", post(update_http::handle))
        .route("/delete-entry", post(delete_http::handle))
        .route("/list-entries", get(list_http::handle))
        .route("/export-entries", get(export_http::export))
        .route("/print-entries", get(export_http::print))
        .route("/import-entries", post(import_http::handle))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[cfg(test)]
mod error_response_tests {
    use super::*;
    use crate::modules::logbook::core::entry::EntryId;
    use crate::shared::infrastructure::entry_store::EntryStoreError;
    use http_body_util::BodyExt;
    use rstest::rstest;

    #[rstest]
    #[case(ApplicationError::Domain("identifier".into()), StatusCode::BAD_REQUEST)]
    #[case(ApplicationError::InvalidQuery("start_date".into()), StatusCode::BAD_REQUEST)]
    #[case(ApplicationError::InvalidBody("not utf-8".into()), StatusCode::BAD_REQUEST)]
    #[case(ApplicationError::NotFound(EntryId::mint()), StatusCode::NOT_FOUND)]
    #[case(
        ApplicationError::Store(EntryStoreError::Backend("down".into())),
        StatusCode::INTERNAL_SERVER_ERROR
    )]
    #[tokio::test]
    async fn it_should_map_errors_to_status_and_message(
        #[case] error: ApplicationError,
        #[case] status: StatusCode,
    ) {
        let message = error.to_string();

        let response = error_response(error);

        assert_eq!(response.status(), status);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["error"], message);
    }
}
