use std::sync::Arc;

use chrono::{NaiveDate, NaiveTime};
use tracing::debug;

use shared_database::{db_error, AppState};
use shared_models::error::AppError;

use crate::models::Horario;

const SLOT_VIEW: &str = r#"
    SELECT h.id,
           DATE_FORMAT(h.data, '%Y-%m-%d') AS data,
           TIME_FORMAT(h.hora, '%H:%i') AS hora,
           h.profissional_id,
           h.disponivel,
           p.nome AS nome_profissional
    FROM HorariosDisponiveis h
    LEFT JOIN Profissionais p ON h.profissional_id = p.id
"#;

/// Ad-hoc slot management, independent of the booking flow: slots created
/// here start available, while bookings insert their own taken rows. The
/// duality comes from the source and is kept on purpose.
pub struct SlotService {
    state: Arc<AppState>,
}

impl SlotService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub async fn list(&self) -> Result<Vec<Horario>, AppError> {
        let rows = sqlx::query_as::<_, Horario>(SLOT_VIEW)
            .fetch_all(&self.state.db)
            .await
            .map_err(db_error)?;

        debug!("Found {} slots", rows.len());
        Ok(rows)
    }

    pub async fn create(
        &self,
        data: NaiveDate,
        hora: NaiveTime,
        profissional_id: i64,
    ) -> Result<Horario, AppError> {
        let result = sqlx::query(
            "INSERT INTO HorariosDisponiveis (data, hora, profissional_id) VALUES (?, ?, ?)",
        )
        .bind(data)
        .bind(hora)
        .bind(profissional_id)
        .execute(&self.state.db)
        .await
        .map_err(db_error)?;

        self.get(result.last_insert_id() as i64).await
    }

    pub async fn update(
        &self,
        id: i64,
        data: NaiveDate,
        hora: NaiveTime,
        profissional_id: i64,
    ) -> Result<Horario, AppError> {
        let result = sqlx::query(
            "UPDATE HorariosDisponiveis SET data = ?, hora = ?, profissional_id = ? WHERE id = ?",
        )
        .bind(data)
        .bind(hora)
        .bind(profissional_id)
        .bind(id)
        .execute(&self.state.db)
        .await
        .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Horário não encontrado".to_string()));
        }

        self.get(id).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM HorariosDisponiveis WHERE id = ?")
            .bind(id)
            .execute(&self.state.db)
            .await
            .map_err(db_error)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Horário não encontrado".to_string()));
        }

        Ok(())
    }

    async fn get(&self, id: i64) -> Result<Horario, AppError> {
        let sql = format!("{} WHERE h.id = ?", SLOT_VIEW);

        sqlx::query_as::<_, Horario>(&sql)
            .bind(id)
            .fetch_optional(&self.state.db)
            .await
            .map_err(db_error)?
            .ok_or_else(|| AppError::NotFound("Horário não encontrado".to_string()))
    }
}
