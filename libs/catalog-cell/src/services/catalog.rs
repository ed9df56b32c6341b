use std::sync::Arc;

use tracing::debug;

use shared_database::{db_error, AppState};
use shared_models::error::AppError;

use crate::models::{Profissional, ProfissionalPayload, Servico, ServicoPayload};

/// Single-statement CRUD over the independent catalog tables. No
/// cross-entity invariants live here.
pub struct CatalogService {
    state: Arc<AppState>,
}

impl CatalogService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub async fn list_servicos(&self) -> Result<Vec<Servico>, AppError> {
        sqlx::query_as::<_, Servico>("SELECT id, nome, duracao, preco FROM Servicos")
            .fetch_all(&self.state.db)
            .await
            .map_err(db_error)
    }

    pub async fn get_servico(&self, id: i64) -> Result<Servico, AppError> {
        sqlx::query_as::<_, Servico>("SELECT id, nome, duracao, preco FROM Servicos WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.state.db)
            .await
            .map_err(db_error)?
            .ok_or_else(|| AppError::NotFound("Serviço não encontrado".to_string()))
    }

    pub async fn create_servico(&self, payload: ServicoPayload) -> Result<Servico, AppError> {
        let (nome, duracao, preco) = payload.validate()?;

        let result = sqlx::query("INSERT INTO Servicos (nome, duracao, preco) VALUES (?, ?, ?)")
            .bind(&nome)
            .bind(duracao)
            .bind(preco)
            .execute(&self.state.db)
            .await
            .map_err(db_error)?;

        debug!("Service created with id {}", result.last_insert_id());

        Ok(Servico {
            id: result.last_insert_id() as i64,
            nome,
            duracao,
            preco,
        })
    }

    pub async fn update_servico(
        &self,
        id: i64,
        payload: ServicoPayload,
    ) -> Result<Servico, AppError> {
        let (nome, duracao, preco) = payload.validate()?;

        let result =
            sqlx::query("UPDATE Servicos SET nome = ?, duracao = ?, preco = ? WHERE id = ?")
                .bind(&nome)
                .bind(duracao)
                .bind(preco)
                .bind(id)
                .execute(&self.state.db)
                .await
                .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Serviço não encontrado".to_string()));
        }

        Ok(Servico {
            id,
            nome,
            duracao,
            preco,
        })
    }

    pub async fn delete_servico(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM Servicos WHERE id = ?")
            .bind(id)
            .execute(&self.state.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Serviço não encontrado".to_string()));
        }

        Ok(())
    }

    pub async fn list_profissionais(&self) -> Result<Vec<Profissional>, AppError> {
        let rows =
            sqlx::query_as::<_, Profissional>("SELECT id, nome, especialidade FROM Profissionais")
                .fetch_all(&self.state.db)
                .await
                .map_err(db_error)?;

        debug!("Found {} professionals", rows.len());
        Ok(rows)
    }

    pub async fn get_profissional(&self, id: i64) -> Result<Profissional, AppError> {
        sqlx::query_as::<_, Profissional>(
            "SELECT id, nome, especialidade FROM Profissionais WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.state.db)
        .await
        .map_err(db_error)?
        .ok_or_else(|| AppError::NotFound("Profissional não encontrado".to_string()))
    }

    pub async fn create_profissional(
        &self,
        payload: ProfissionalPayload,
    ) -> Result<Profissional, AppError> {
        let (nome, especialidade) = payload.validate()?;

        let result = sqlx::query("INSERT INTO Profissionais (nome, especialidade) VALUES (?, ?)")
            .bind(&nome)
            .bind(&especialidade)
            .execute(&self.state.db)
            .await
            .map_err(db_error)?;

        Ok(Profissional {
            id: result.last_insert_id() as i64,
            nome,
            especialidade,
        })
    }

    pub async fn update_profissional(
        &self,
        id: i64,
        payload: ProfissionalPayload,
    ) -> Result<Profissional, AppError> {
        let (nome, especialidade) = payload.validate()?;

        let result =
            sqlx::query("UPDATE Profissionais SET nome = ?, especialidade = ? WHERE id = ?")
                .bind(&nome)
                .bind(&especialidade)
                .bind(id)
                .execute(&self.state.db)
                .await
                .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Profissional não encontrado".to_string(),
            ));
        }

        Ok(Profissional {
            id,
            nome,
            especialidade,
        })
    }

    pub async fn delete_profissional(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM Profissionais WHERE id = ?")
            .bind(id)
            .execute(&self.state.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(
                "Profissional não encontrado".to_string(),
            ));
        }

        Ok(())
    }
}
