use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

/// Appointment lifecycle: agendado is the only live state; concluido and
/// cancelado are terminal. Cancelling releases the referenced slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Agendado,
    Concluido,
    Cancelado,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Agendado => "agendado",
            AppointmentStatus::Concluido => "concluido",
            AppointmentStatus::Cancelado => "cancelado",
        }
    }

    pub fn parse(value: &str) -> Result<Self, AppError> {
        match value {
            "agendado" => Ok(AppointmentStatus::Agendado),
            "concluido" => Ok(AppointmentStatus::Concluido),
            "cancelado" => Ok(AppointmentStatus::Cancelado),
            _ => Err(AppError::Validation("Status inválido".to_string())),
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            AppointmentStatus::Concluido | AppointmentStatus::Cancelado
        )
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateAgendamentoPayload {
    pub paciente_id: Option<i64>,
    pub profissional_id: Option<i64>,
    pub servico_id: Option<i64>,
    pub data: Option<String>,
    pub hora: Option<String>,
    pub observacoes: Option<String>,
}

impl CreateAgendamentoPayload {
    pub fn validate(self) -> Result<NewAgendamento, AppError> {
        let (Some(paciente_id), Some(profissional_id), Some(servico_id), Some(data), Some(hora)) = (
            self.paciente_id,
            self.profissional_id,
            self.servico_id,
            self.data,
            self.hora,
        ) else {
            return Err(AppError::Validation(
                "Paciente, profissional, serviço, data e hora são obrigatórios".to_string(),
            ));
        };

        Ok(NewAgendamento {
            paciente_id,
            profissional_id,
            servico_id,
            data: parse_data(&data)?,
            hora: parse_hora(&hora)?,
            observacoes: self.observacoes,
        })
    }
}

#[derive(Debug)]
pub struct NewAgendamento {
    pub paciente_id: i64,
    pub profissional_id: i64,
    pub servico_id: i64,
    pub data: NaiveDate,
    pub hora: NaiveTime,
    pub observacoes: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAgendamentoPayload {
    pub status: Option<String>,
    pub observacoes: Option<String>,
}

impl UpdateAgendamentoPayload {
    pub fn validate(self) -> Result<(AppointmentStatus, Option<String>), AppError> {
        let status = self
            .status
            .ok_or_else(|| AppError::Validation("Status é obrigatório".to_string()))?;

        Ok((AppointmentStatus::parse(&status)?, self.observacoes))
    }
}

/// Denormalized appointment view returned by create, update and the global
/// list: names joined in, slot date and time collapsed into `data_hora`.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct AgendamentoView {
    pub id: i64,
    pub nome_paciente: Option<String>,
    pub nome_profissional: Option<String>,
    pub nome_servico: Option<String>,
    pub data_hora: Option<String>,
    pub status: String,
    pub observacoes: Option<String>,
}

/// The per-patient listing keeps the source's narrower projection (separate
/// date and time columns, no patient name) and ascending order.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct PacienteAgendamentoView {
    pub id: i64,
    pub data: Option<String>,
    pub hora: Option<String>,
    pub nome_profissional: Option<String>,
    pub nome_servico: Option<String>,
    pub status: String,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Horario {
    pub id: i64,
    pub data: String,
    pub hora: String,
    pub profissional_id: Option<i64>,
    pub disponivel: bool,
    pub nome_profissional: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHorarioPayload {
    pub data: Option<String>,
    pub hora: Option<String>,
    pub profissional_id: Option<i64>,
}

impl CreateHorarioPayload {
    pub fn validate(self) -> Result<(NaiveDate, NaiveTime, i64), AppError> {
        let (Some(data), Some(hora), Some(profissional_id)) =
            (self.data, self.hora, self.profissional_id)
        else {
            return Err(AppError::Validation(
                "Data, hora e profissional são obrigatórios".to_string(),
            ));
        };

        Ok((parse_data(&data)?, parse_hora(&hora)?, profissional_id))
    }
}

/// Slot update keyed by the id carried in the body, as the original API
/// shaped it.
#[derive(Debug, Deserialize)]
pub struct UpdateHorarioPayload {
    pub id: Option<i64>,
    pub data: Option<String>,
    pub hora: Option<String>,
    pub profissional_id: Option<i64>,
}

impl UpdateHorarioPayload {
    pub fn validate(self) -> Result<(i64, NaiveDate, NaiveTime, i64), AppError> {
        let id = self
            .id
            .ok_or_else(|| AppError::Validation("Id é obrigatório".to_string()))?;

        let (data, hora, profissional_id) = CreateHorarioPayload {
            data: self.data,
            hora: self.hora,
            profissional_id: self.profissional_id,
        }
        .validate()?;

        Ok((id, data, hora, profissional_id))
    }
}

fn parse_data(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| AppError::Validation("Data inválida".to_string()))
}

fn parse_hora(value: &str) -> Result<NaiveTime, AppError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| AppError::Validation("Hora inválida".to_string()))
}
