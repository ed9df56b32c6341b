use std::sync::Arc;

use tracing::debug;

use shared_database::{db_error, AppState};
use shared_models::auth::{AuthUser, Role};
use shared_models::error::AppError;
use shared_utils::password::{hash_password, verify_password};

use crate::models::{Authenticated, CredentialRow, RegisteredPatient, Registration};

pub struct CredentialService {
    state: Arc<AppState>,
}

impl CredentialService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Credential check against both tables: administrators first, then
    /// patients. A hash mismatch in the admin table still falls through to
    /// the patient table, so an email present in both stays usable for both
    /// accounts. A miss everywhere is the same generic failure - callers
    /// cannot probe which emails exist.
    pub async fn authenticate(&self, email: &str, senha: &str) -> Result<Authenticated, AppError> {
        if let Some(admin) = self.find_credential("Administradores", email).await? {
            if Self::password_matches(senha, admin.senha.as_deref()) {
                debug!("Admin login for {}", email);
                return Ok(Authenticated {
                    user: AuthUser {
                        id: admin.id,
                        email: admin.email,
                        role: Role::Admin,
                    },
                    nome: admin.nome,
                });
            }
        }

        if let Some(patient) = self.find_credential("Pacientes", email).await? {
            if Self::password_matches(senha, patient.senha.as_deref()) {
                debug!("Patient login for {}", email);
                return Ok(Authenticated {
                    user: AuthUser {
                        id: patient.id,
                        email: patient.email,
                        role: Role::Patient,
                    },
                    nome: patient.nome,
                });
            }
        }

        Err(Self::invalid_credentials())
    }

    /// Self-registration: uniqueness check before insert, salted hash stored
    /// in place of the plaintext.
    pub async fn register_patient(
        &self,
        registration: Registration,
    ) -> Result<RegisteredPatient, AppError> {
        let existing: Option<i64> = sqlx::query_scalar("SELECT id FROM Pacientes WHERE email = ?")
            .bind(&registration.email)
            .fetch_optional(&self.state.db)
            .await
            .map_err(db_error)?;

        if existing.is_some() {
            return Err(AppError::Conflict("E-mail já cadastrado".to_string()));
        }

        let senha_hash = hash_password(&registration.senha)?;

        let result = sqlx::query(
            "INSERT INTO Pacientes (nome, telefone, email, senha) VALUES (?, ?, ?, ?)",
        )
        .bind(&registration.nome)
        .bind(&registration.telefone)
        .bind(&registration.email)
        .bind(&senha_hash)
        .execute(&self.state.db)
        .await
        .map_err(db_error)?;

        debug!("Patient registered: {}", registration.email);

        Ok(RegisteredPatient {
            id: result.last_insert_id() as i64,
            nome: registration.nome,
            email: registration.email,
            telefone: registration.telefone,
        })
    }

    async fn find_credential(
        &self,
        table: &str,
        email: &str,
    ) -> Result<Option<CredentialRow>, AppError> {
        // `table` comes from the two literals above, never from input.
        let sql = format!("SELECT id, nome, email, senha FROM {} WHERE email = ?", table);

        sqlx::query_as::<_, CredentialRow>(&sql)
            .bind(email)
            .fetch_optional(&self.state.db)
            .await
            .map_err(db_error)
    }

    fn password_matches(senha: &str, stored: Option<&str>) -> bool {
        match stored {
            Some(hash) => verify_password(senha, hash),
            None => false,
        }
    }

    fn invalid_credentials() -> AppError {
        AppError::Auth("Credenciais inválidas".to_string())
    }
}
