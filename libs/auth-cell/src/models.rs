use serde::{Deserialize, Serialize};

use shared_models::auth::AuthUser;
use shared_models::error::AppError;

#[derive(Debug, Deserialize)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub senha: Option<String>,
}

impl LoginPayload {
    pub fn validate(self) -> Result<(String, String), AppError> {
        match (self.email, self.senha) {
            (Some(email), Some(senha)) if !email.is_empty() && !senha.is_empty() => {
                Ok((email, senha))
            }
            _ => Err(AppError::Validation(
                "E-mail e senha são obrigatórios".to_string(),
            )),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: SessionUser,
}

/// Public view of the logged-in account; never carries the password hash.
#[derive(Debug, Serialize)]
pub struct SessionUser {
    pub id: i64,
    pub nome: Option<String>,
    pub email: String,
    pub role: String,
}

#[derive(Debug, Deserialize)]
pub struct RegisterPayload {
    pub nome: Option<String>,
    pub email: Option<String>,
    pub senha: Option<String>,
    pub telefone: Option<String>,
}

impl RegisterPayload {
    pub fn validate(self) -> Result<Registration, AppError> {
        match (self.nome, self.email, self.senha) {
            (Some(nome), Some(email), Some(senha))
                if !nome.is_empty() && !email.is_empty() && !senha.is_empty() =>
            {
                Ok(Registration {
                    nome,
                    email,
                    senha,
                    telefone: self.telefone,
                })
            }
            _ => Err(AppError::Validation(
                "Nome, e-mail e senha são obrigatórios".to_string(),
            )),
        }
    }
}

#[derive(Debug)]
pub struct Registration {
    pub nome: String,
    pub email: String,
    pub senha: String,
    pub telefone: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct RegisteredPatient {
    pub id: i64,
    pub nome: String,
    pub email: String,
    pub telefone: Option<String>,
}

/// Row shape shared by the two credential tables; `senha` is nullable because
/// admin-inserted patients have no password and cannot log in.
#[derive(Debug, sqlx::FromRow)]
pub struct CredentialRow {
    pub id: i64,
    pub nome: Option<String>,
    pub email: String,
    pub senha: Option<String>,
}

/// The authenticated account plus the display fields the login response
/// carries.
#[derive(Debug)]
pub struct Authenticated {
    pub user: AuthUser,
    pub nome: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_requires_both_fields() {
        let missing_senha = LoginPayload {
            email: Some("ana@email.com".to_string()),
            senha: None,
        };
        assert!(missing_senha.validate().is_err());

        let empty_email = LoginPayload {
            email: Some(String::new()),
            senha: Some("segredo".to_string()),
        };
        assert!(empty_email.validate().is_err());
    }

    #[test]
    fn registration_telefone_is_optional() {
        let payload = RegisterPayload {
            nome: Some("Ana Lima".to_string()),
            email: Some("ana@email.com".to_string()),
            senha: Some("segredo123".to_string()),
            telefone: None,
        };
        assert!(payload.validate().is_ok());
    }
}
