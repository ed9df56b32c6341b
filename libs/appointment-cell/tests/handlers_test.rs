use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use appointment_cell::router::appointment_routes;
use shared_utils::test_utils::TestConfig;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// Business-rule failures are detected before the store is touched; the lazy
// test pool never connects.

#[tokio::test]
async fn booking_without_hora_is_rejected() {
    let app = appointment_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(json_request(
            "POST",
            "/agendamentos",
            serde_json::json!({
                "paciente_id": 1,
                "profissional_id": 2,
                "servico_id": 3,
                "data": "2024-06-01"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn booking_with_malformed_date_is_rejected() {
    let app = appointment_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(json_request(
            "POST",
            "/agendamentos",
            serde_json::json!({
                "paciente_id": 1,
                "profissional_id": 2,
                "servico_id": 3,
                "data": "01/06/2024",
                "hora": "10:00"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_with_invalid_status_is_rejected() {
    let app = appointment_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(json_request(
            "PUT",
            "/agendamentos/1",
            serde_json::json!({ "status": "remarcado" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn slot_creation_without_profissional_is_rejected() {
    let app = appointment_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(json_request(
            "POST",
            "/horarios",
            serde_json::json!({ "data": "2024-06-01", "hora": "10:00" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
