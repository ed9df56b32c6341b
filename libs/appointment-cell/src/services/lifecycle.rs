use std::sync::Arc;

use sqlx::{MySql, Transaction};
use tracing::{debug, info};

use shared_database::{db_error, AppState};
use shared_models::error::AppError;

use crate::models::{
    AgendamentoView, AppointmentStatus, NewAgendamento, PacienteAgendamentoView,
};

/// Joined projection shared by create, update and the global list.
const JOINED_VIEW: &str = r#"
    SELECT a.id,
           pa.nome AS nome_paciente,
           pr.nome AS nome_profissional,
           s.nome AS nome_servico,
           CONCAT(DATE_FORMAT(h.data, '%Y-%m-%d'), ' ', TIME_FORMAT(h.hora, '%H:%i')) AS data_hora,
           a.status,
           a.observacoes
    FROM Agendamentos a
    LEFT JOIN Pacientes pa ON a.paciente_id = pa.id
    LEFT JOIN Profissionais pr ON a.profissional_id = pr.id
    LEFT JOIN Servicos s ON a.servico_id = s.id
    LEFT JOIN HorariosDisponiveis h ON a.horario_id = h.id
"#;

#[derive(sqlx::FromRow)]
struct AgendamentoRow {
    status: String,
    horario_id: Option<i64>,
}

/// Keeps Agendamentos and HorariosDisponiveis consistent across create,
/// update and cancel. Every mutation runs inside one transaction; an early
/// return rolls the whole unit back when the transaction drops.
///
/// Known gap, preserved from the source: each booking inserts a fresh slot
/// row, and nothing prevents two concurrent bookings for the same
/// professional, date and time.
pub struct AppointmentLifecycleService {
    state: Arc<AppState>,
}

impl AppointmentLifecycleService {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    /// Books an appointment: inserts the slot already taken, inserts the
    /// appointment referencing it, reads back the joined view. A read-back
    /// miss aborts the unit so no half-written booking survives.
    pub async fn create(&self, novo: NewAgendamento) -> Result<AgendamentoView, AppError> {
        let mut tx = self.state.db.begin().await.map_err(db_error)?;

        let slot = sqlx::query(
            "INSERT INTO HorariosDisponiveis (data, hora, profissional_id, disponivel) \
             VALUES (?, ?, ?, FALSE)",
        )
        .bind(novo.data)
        .bind(novo.hora)
        .bind(novo.profissional_id)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;
        let horario_id = slot.last_insert_id() as i64;

        let appointment = sqlx::query(
            "INSERT INTO Agendamentos \
             (paciente_id, profissional_id, servico_id, horario_id, status, observacoes) \
             VALUES (?, ?, ?, ?, 'agendado', ?)",
        )
        .bind(novo.paciente_id)
        .bind(novo.profissional_id)
        .bind(novo.servico_id)
        .bind(horario_id)
        .bind(&novo.observacoes)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;
        let id = appointment.last_insert_id() as i64;

        let view = Self::fetch_view(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::Internal("Erro ao criar agendamento".to_string()))?;

        tx.commit().await.map_err(db_error)?;

        info!("Appointment {} created against slot {}", id, horario_id);
        Ok(view)
    }

    /// Status update; cancelling additionally releases the slot, in the same
    /// transaction. Transitions out of a terminal state are rejected before
    /// anything is written.
    pub async fn update_status(
        &self,
        id: i64,
        status: AppointmentStatus,
        observacoes: Option<String>,
    ) -> Result<AgendamentoView, AppError> {
        let mut tx = self.state.db.begin().await.map_err(db_error)?;

        let current = Self::fetch_row(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))?;

        let current_status = AppointmentStatus::parse(&current.status)?;
        if current_status.is_terminal() && status != current_status {
            return Err(AppError::Validation(
                "Agendamento concluído ou cancelado não pode ser alterado".to_string(),
            ));
        }

        sqlx::query(
            "UPDATE Agendamentos SET status = ?, observacoes = COALESCE(?, observacoes) \
             WHERE id = ?",
        )
        .bind(status.as_str())
        .bind(&observacoes)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(db_error)?;

        if status == AppointmentStatus::Cancelado {
            Self::release_slot(&mut tx, current.horario_id).await?;
        }

        let view = Self::fetch_view(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))?;

        tx.commit().await.map_err(db_error)?;

        debug!("Appointment {} moved to {}", id, status.as_str());
        Ok(view)
    }

    /// Removal-style cancellation: same effect as update-to-cancelled.
    /// Cancelling an already-cancelled appointment is a no-op on the slot
    /// flag; a completed appointment cannot be cancelled.
    pub async fn cancel(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.state.db.begin().await.map_err(db_error)?;

        let current = Self::fetch_row(&mut tx, id)
            .await?
            .ok_or_else(|| AppError::NotFound("Agendamento não encontrado".to_string()))?;

        match AppointmentStatus::parse(&current.status)? {
            AppointmentStatus::Cancelado => return Ok(()),
            AppointmentStatus::Concluido => {
                return Err(AppError::Validation(
                    "Agendamento concluído não pode ser cancelado".to_string(),
                ));
            }
            AppointmentStatus::Agendado => {}
        }

        sqlx::query("UPDATE Agendamentos SET status = 'cancelado' WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(db_error)?;

        Self::release_slot(&mut tx, current.horario_id).await?;

        tx.commit().await.map_err(db_error)?;

        info!("Appointment {} cancelled", id);
        Ok(())
    }

    /// Full joined listing, most recent slot first.
    pub async fn list_all(&self) -> Result<Vec<AgendamentoView>, AppError> {
        let sql = format!("{} ORDER BY h.data DESC, h.hora DESC", JOINED_VIEW);

        sqlx::query_as::<_, AgendamentoView>(&sql)
            .fetch_all(&self.state.db)
            .await
            .map_err(db_error)
    }

    /// Per-patient listing with the source's narrower projection, ascending.
    pub async fn list_by_patient(
        &self,
        paciente_id: i64,
    ) -> Result<Vec<PacienteAgendamentoView>, AppError> {
        sqlx::query_as::<_, PacienteAgendamentoView>(
            r#"
            SELECT a.id,
                   DATE_FORMAT(h.data, '%Y-%m-%d') AS data,
                   TIME_FORMAT(h.hora, '%H:%i') AS hora,
                   pr.nome AS nome_profissional,
                   s.nome AS nome_servico,
                   a.status
            FROM Agendamentos a
            LEFT JOIN Profissionais pr ON a.profissional_id = pr.id
            LEFT JOIN Servicos s ON a.servico_id = s.id
            LEFT JOIN HorariosDisponiveis h ON a.horario_id = h.id
            WHERE a.paciente_id = ?
            ORDER BY h.data ASC, h.hora ASC
            "#,
        )
        .bind(paciente_id)
        .fetch_all(&self.state.db)
        .await
        .map_err(db_error)
    }

    async fn fetch_row(
        tx: &mut Transaction<'_, MySql>,
        id: i64,
    ) -> Result<Option<AgendamentoRow>, AppError> {
        sqlx::query_as::<_, AgendamentoRow>(
            "SELECT status, horario_id FROM Agendamentos WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
        .map_err(db_error)
    }

    async fn fetch_view(
        tx: &mut Transaction<'_, MySql>,
        id: i64,
    ) -> Result<Option<AgendamentoView>, AppError> {
        let sql = format!("{} WHERE a.id = ?", JOINED_VIEW);

        sqlx::query_as::<_, AgendamentoView>(&sql)
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(db_error)
    }

    async fn release_slot(
        tx: &mut Transaction<'_, MySql>,
        horario_id: Option<i64>,
    ) -> Result<(), AppError> {
        let Some(horario_id) = horario_id else {
            return Ok(());
        };

        sqlx::query("UPDATE HorariosDisponiveis SET disponivel = TRUE WHERE id = ?")
            .bind(horario_id)
            .execute(&mut **tx)
            .await
            .map_err(db_error)?;

        Ok(())
    }
}
