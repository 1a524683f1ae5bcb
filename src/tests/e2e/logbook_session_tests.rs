use crate::modules::logbook::use_cases::export_entries::handler::EXPORT_FILE_NAME;
use crate::shared::infrastructure::entry_store::EntryStore;
use crate::shell::http::router;
use crate::shell::state::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use tower::ServiceExt;

async fn send(state: &AppState, request: Request<Body>) -> (StatusCode, String) {
    let response = router(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn post_json(uri: &str, body: String) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn records_edits_exports_and_reimports_a_shift() {
    let state = AppState::in_memory();

    let (status, _) = send(
        &state,
        post_json(
            "/record-shift-change",
            r#"{"date":"2024-01-15","time":"06:00","employee_name":"Maria Lopez"}"#.into(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // No operator in the body: the one who took the shift is used.
    let (status, body) = send(
        &state,
        post_json(
            "/record-event",
            r#"{"date":"2024-01-15","time":"08:00","identifier":"pmp","description":"Pump failure","informed_to":"Supervisor"}"#.into(),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = serde_json::from_str::<serde_json::Value>(&body).unwrap()["id"]
        .as_str()
        .unwrap()
        .to_string();

    let (status, _) = send(
        &state,
        post_json(
            "/update-event",
            format!(
                r#"{{"id":"{id}","date":"2024-01-16","time":"09:15","identifier":"PMP","description":"Pump replaced","informed_to":"Maintenance","employee_name":"John Doe"}}"#
            ),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, body) = send(&state, get("/list-entries?identifier=pm&start_date=2024-01-16")).await;
    assert_eq!(status, StatusCode::OK);
    let listed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(listed.as_array().unwrap().len(), 1);
    assert_eq!(listed[0]["id"], id.as_str());
    assert_eq!(listed[0]["description"], "Pump replaced");

    let response = router(state.clone()).oneshot(get("/export-entries")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(
        response.headers()[header::CONTENT_DISPOSITION]
            .to_str()
            .unwrap()
            .contains(EXPORT_FILE_NAME)
    );
    let exported =
        String::from_utf8(response.into_body().collect().await.unwrap().to_bytes().to_vec()).unwrap();
    assert_eq!(
        exported,
        "2024-01-15 06:00 - TURNO: Maria Lopez\n\
         2024-01-16 09:15 - PMP: Pump replaced (Informado a: Maintenance, Operador: John Doe)"
    );

    let (status, _) = send(&state, post_json("/delete-entry", format!(r#"{{"id":"{id}"}}"#))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = send(&state, post_json("/delete-entry", format!(r#"{{"id":"{id}"}}"#))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(
        &state,
        Request::post("/import-entries")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from(exported.clone()))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(serde_json::from_str::<serde_json::Value>(&body).unwrap()["imported"], 2);

    let entries = state.store.list().await.unwrap();
    assert_eq!(entries.len(), 3);
    assert!(entries.iter().all(|entry| entry.id.to_string() != id));

    let (status, printed) = send(&state, get("/print-entries?identifier=PMP")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        printed,
        "2024-01-16 09:15 - PMP: Pump replaced (Informado a: Maintenance, Operador: John Doe)"
    );
}

#[tokio::test]
async fn rejects_a_search_with_a_malformed_date() {
    let (status, body) = send(&AppState::in_memory(), get("/list-entries?start_date=15/01/2024")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("start_date"));
}
