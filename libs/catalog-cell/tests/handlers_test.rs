use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use catalog_cell::router::catalog_routes;
use shared_utils::test_utils::TestConfig;

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

// Required-field checks run before any statement touches the store, so these
// requests complete against a pool that never connects.

#[tokio::test]
async fn create_servico_without_preco_is_rejected() {
    let app = catalog_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(json_request(
            "POST",
            "/servicos",
            serde_json::json!({ "nome": "Fisioterapia", "duracao": 50 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_servico_with_missing_fields_is_rejected() {
    let app = catalog_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(json_request(
            "PUT",
            "/servicos/1",
            serde_json::json!({ "preco": 120.0 }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn create_profissional_without_especialidade_is_rejected() {
    let app = catalog_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(json_request(
            "POST",
            "/profissionais",
            serde_json::json!({ "nome": "Dra. Carla" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
