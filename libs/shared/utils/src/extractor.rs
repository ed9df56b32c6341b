use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};

use shared_database::AppState;
use shared_models::auth::{AuthUser, Role};
use shared_models::error::AppError;

use crate::jwt::validate_token;

/// Middleware for authentication: validates the bearer token and stores the
/// caller in request extensions for downstream handlers and guards.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .ok_or_else(|| AppError::Auth("Token não fornecido".to_string()))?;

    let auth_value = auth_header
        .to_str()
        .map_err(|_| AppError::Auth("Formato de autorização inválido".to_string()))?;

    if !auth_value.starts_with("Bearer ") {
        return Err(AppError::Auth("Formato de autorização inválido".to_string()));
    }

    let token = &auth_value[7..];

    let user = validate_token(token, &state.config.jwt_secret).map_err(AppError::Auth)?;

    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}

/// Role guard layered inside `auth_middleware` on admin-only routes.
pub async fn require_admin(
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    let user = request
        .extensions()
        .get::<AuthUser>()
        .ok_or_else(|| AppError::Auth("Token não fornecido".to_string()))?;

    if user.role != Role::Admin {
        return Err(AppError::Permission(
            "Acesso restrito a administradores".to_string(),
        ));
    }

    Ok(next.run(request).await)
}
