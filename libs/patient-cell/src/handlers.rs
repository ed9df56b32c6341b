use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{CreatePacientePayload, Paciente, UpdatePacientePayload};
use crate::services::patients::PatientService;

pub async fn list_pacientes(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Paciente>>, AppError> {
    let pacientes = PatientService::new(state).list().await?;
    Ok(Json(pacientes))
}

pub async fn get_paciente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Paciente>, AppError> {
    let paciente = PatientService::new(state).get(id).await?;
    Ok(Json(paciente))
}

pub async fn create_paciente(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<CreatePacientePayload>,
) -> Result<Json<Paciente>, AppError> {
    let novo = payload.validate()?;
    let paciente = PatientService::new(state).create(novo).await?;
    Ok(Json(paciente))
}

/// Whole-row update; the target id travels in the body, as the original API
/// shaped it.
pub async fn update_paciente(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<UpdatePacientePayload>,
) -> Result<Json<Paciente>, AppError> {
    let (id, novo) = payload.validate()?;
    let paciente = PatientService::new(state).update(id, novo).await?;
    Ok(Json(paciente))
}

pub async fn delete_paciente(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    PatientService::new(state).delete(id).await?;
    Ok(Json(json!({ "message": "Paciente excluído com sucesso" })))
}
