use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;

use auth_cell::router::auth_routes;
use shared_utils::test_utils::{TestConfig, TestUser};

fn get_with_token(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

#[tokio::test]
async fn login_with_missing_senha_is_rejected() {
    let app = auth_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "email": "ana@email.com" }).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn cadastro_with_missing_fields_is_rejected() {
    let app = auth_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/pacientes/cadastro")
                .header("content-type", "application/json")
                .body(Body::from(
                    serde_json::json!({ "nome": "Ana Lima", "email": "ana@email.com" })
                        .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn dashboard_without_token_is_unauthorized() {
    let app = auth_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(get_with_token("/admin/dashboard", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_with_invalid_token_is_unauthorized() {
    let app = auth_routes(TestConfig::default().to_state());

    let response = app
        .oneshot(get_with_token("/admin/dashboard", Some("not.a.token")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn dashboard_with_patient_token_is_forbidden() {
    let config = TestConfig::default();
    let token = TestUser::patient("ana@email.com").token(&config.jwt_secret);
    let app = auth_routes(config.to_state());

    let response = app
        .oneshot(get_with_token("/admin/dashboard", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn dashboard_with_admin_token_is_allowed() {
    let config = TestConfig::default();
    let token = TestUser::admin("gestor@fisiovital.com").token(&config.jwt_secret);
    let app = auth_routes(config.to_state());

    let response = app
        .oneshot(get_with_token("/admin/dashboard", Some(&token)))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}
