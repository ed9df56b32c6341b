use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use shared_models::auth::{AuthUser, JwtClaims};
use shared_models::error::AppError;

/// Session tokens expire 24 hours after issuance.
pub const TOKEN_TTL_HOURS: i64 = 24;

pub fn issue_token(user: &AuthUser, jwt_secret: &str) -> Result<String, AppError> {
    if jwt_secret.is_empty() {
        return Err(AppError::Internal("JWT secret is not set".to_string()));
    }

    let now = Utc::now();
    let claims = JwtClaims {
        sub: user.id,
        email: user.email.clone(),
        role: user.role,
        iat: now.timestamp(),
        exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
}

pub fn validate_token(token: &str, jwt_secret: &str) -> Result<AuthUser, String> {
    if jwt_secret.is_empty() {
        return Err("JWT secret is not set".to_string());
    }

    let data = decode::<JwtClaims>(
        token,
        &DecodingKey::from_secret(jwt_secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| {
        debug!("Token validation failed: {}", e);
        "Token inválido".to_string()
    })?;

    let claims = data.claims;
    debug!("Token validated successfully for user: {}", claims.sub);

    Ok(AuthUser {
        id: claims.sub,
        email: claims.email,
        role: claims.role,
    })
}
