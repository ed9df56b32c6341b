use std::sync::Arc;

use axum::{
    extract::{Extension, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::debug;

use shared_database::AppState;
use shared_models::auth::AuthUser;
use shared_models::error::AppError;
use shared_utils::jwt::issue_token;

use crate::models::{LoginPayload, LoginResponse, RegisterPayload, SessionUser};
use crate::services::credentials::CredentialService;

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginPayload>,
) -> Result<Json<LoginResponse>, AppError> {
    let (email, senha) = payload.validate()?;
    debug!("Login attempt for {}", email);

    let authenticated = CredentialService::new(state.clone())
        .authenticate(&email, &senha)
        .await?;

    let token = issue_token(&authenticated.user, &state.config.jwt_secret)?;

    Ok(Json(LoginResponse {
        token,
        user: SessionUser {
            id: authenticated.user.id,
            nome: authenticated.nome,
            email: authenticated.user.email,
            role: authenticated.user.role.as_str().to_string(),
        },
    }))
}

pub async fn register_patient(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<RegisterPayload>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let registration = payload.validate()?;

    let patient = CredentialService::new(state)
        .register_patient(registration)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "message": "Cadastro realizado com sucesso",
            "paciente": patient
        })),
    ))
}

pub async fn admin_dashboard(
    Extension(user): Extension<AuthUser>,
) -> Result<Json<Value>, AppError> {
    debug!("Dashboard access by admin {}", user.id);

    Ok(Json(json!({
        "message": "Bem-vindo ao painel administrativo",
        "user": user
    })))
}
