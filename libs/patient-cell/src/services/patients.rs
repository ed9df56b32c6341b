use std::sync::Arc;

use tracing::debug;

use shared_database::{db_error, AppState};
use shared_models::error::AppError;

use crate::models::{NewPaciente, Paciente};

const PATIENT_COLUMNS: &str = "id, nome, telefone, email, historico";

pub struct PatientService {
    state: Arc<AppState>,
}

impl PatientService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub async fn list(&self) -> Result<Vec<Paciente>, AppError> {
        let rows = sqlx::query_as::<_, Paciente>(&format!(
            "SELECT {} FROM Pacientes",
            PATIENT_COLUMNS
        ))
        .fetch_all(&self.state.db)
        .await
        .map_err(db_error)?;

        debug!("Found {} patients", rows.len());
        Ok(rows)
    }

    pub async fn get(&self, id: i64) -> Result<Paciente, AppError> {
        sqlx::query_as::<_, Paciente>(&format!(
            "SELECT {} FROM Pacientes WHERE id = ?",
            PATIENT_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| AppError::NotFound("Paciente não encontrado".to_string()))
    }

    pub async fn create(&self, paciente: NewPaciente) -> Result<Paciente, AppError> {
        let result = sqlx::query(
            "INSERT INTO Pacientes (nome, telefone, email, historico) VALUES (?, ?, ?, ?)",
        )
        .bind(&paciente.nome)
        .bind(&paciente.telefone)
        .bind(&paciente.email)
        .bind(&paciente.historico)
        .execute(&self.state.db)
        .await
        .map_err(db_error)?;

        Ok(Paciente {
            id: result.last_insert_id() as i64,
            nome: paciente.nome,
            telefone: paciente.telefone,
            email: paciente.email,
            historico: paciente.historico,
        })
    }

    pub async fn update(&self, id: i64, paciente: NewPaciente) -> Result<Paciente, AppError> {
        let result = sqlx::query(
            "UPDATE Pacientes SET nome = ?, telefone = ?, email = ?, historico = ? WHERE id = ?",
        )
        .bind(&paciente.nome)
        .bind(&paciente.telefone)
        .bind(&paciente.email)
        .bind(&paciente.historico)
        .bind(id)
        .execute(&self.state.db)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Paciente não encontrado".to_string()));
        }

        Ok(Paciente {
            id,
            nome: paciente.nome,
            telefone: paciente.telefone,
            email: paciente.email,
            historico: paciente.historico,
        })
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM Pacientes WHERE id = ?")
            .bind(id)
            .execute(&self.state.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Paciente não encontrado".to_string()));
        }

        Ok(())
    }
}
