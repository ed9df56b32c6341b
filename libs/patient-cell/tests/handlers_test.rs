use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use patient_cell::router::patient_routes;
use shared_utils::test_utils::TestConfig;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn create_paciente_without_nome_is_rejected() {
    let app = patient_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(json_request(
            "POST",
            "/pacientes",
            serde_json::json!({ "telefone": "(11) 90000-0000" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_paciente_without_id_is_rejected() {
    let app = patient_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(json_request(
            "PUT",
            "/pacientes",
            serde_json::json!({ "nome": "Ana Lima" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
