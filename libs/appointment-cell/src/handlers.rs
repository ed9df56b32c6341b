use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{
    AgendamentoView, CreateAgendamentoPayload, CreateHorarioPayload, Horario,
    PacienteAgendamentoView, UpdateAgendamentoPayload, UpdateHorarioPayload,
};
use crate::services::lifecycle::AppointmentLifecycleService;
use crate::services::slots::SlotService;

// ---------------------------------------------------------------------------
// Agendamentos
// ---------------------------------------------------------------------------

pub async fn create_agendamento(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateAgendamentoPayload>,
) -> Result<(StatusCode, Json<AgendamentoView>), AppError> {
    let novo = payload.validate()?;
    let view = AppointmentLifecycleService::new(state).create(novo).await?;
    Ok((StatusCode::CREATED, Json(view)))
}

pub async fn update_agendamento(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateAgendamentoPayload>,
) -> Result<Json<AgendamentoView>, AppError> {
    let (status, observacoes) = payload.validate()?;
    let view = AppointmentLifecycleService::new(state)
        .update_status(id, status, observacoes)
        .await?;
    Ok(Json(view))
}

pub async fn cancel_agendamento(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    AppointmentLifecycleService::new(state).cancel(id).await?;
    Ok(Json(json!({ "message": "Agendamento cancelado com sucesso" })))
}

pub async fn list_agendamentos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<AgendamentoView>>, AppError> {
    let views = AppointmentLifecycleService::new(state).list_all().await?;
    Ok(Json(views))
}

pub async fn list_agendamentos_por_paciente(
    State(state): State<Arc<AppState>>,
    Path(paciente_id): Path<i64>,
) -> Result<Json<Vec<PacienteAgendamentoView>>, AppError> {
    let views = AppointmentLifecycleService::new(state)
        .list_by_patient(paciente_id)
        .await?;
    Ok(Json(views))
}

// ---------------------------------------------------------------------------
// Horarios
// ---------------------------------------------------------------------------

pub async fn list_horarios(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Horario>>, AppError> {
    let horarios = SlotService::new(state).list().await?;
    Ok(Json(horarios))
}

pub async fn create_horario(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreateHorarioPayload>,
) -> Result<(StatusCode, Json<Horario>), AppError> {
    let (data, hora, profissional_id) = payload.validate()?;
    let horario = SlotService::new(state)
        .create(data, hora, profissional_id)
        .await?;
    Ok((StatusCode::CREATED, Json(horario)))
}

pub async fn update_horario(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdateHorarioPayload>,
) -> Result<Json<Horario>, AppError> {
    let (id, data, hora, profissional_id) = payload.validate()?;
    let horario = SlotService::new(state)
        .update(id, data, hora, profissional_id)
        .await?;
    Ok(Json(horario))
}

pub async fn delete_horario(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    SlotService::new(state).delete(id).await?;
    Ok(Json(json!({ "message": "Horário excluído com sucesso" })))
}
