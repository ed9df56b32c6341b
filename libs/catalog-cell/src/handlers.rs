use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use shared_database::AppState;
use shared_models::error::AppError;

use crate::models::{Profissional, ProfissionalPayload, Servico, ServicoPayload};
use crate::services::catalog::CatalogService;

pub async fn list_servicos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Servico>>, AppError> {
    let servicos = CatalogService::new(state).list_servicos().await?;
    Ok(Json(servicos))
}

pub async fn get_servico(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Servico>, AppError> {
    let servico = CatalogService::new(state).get_servico(id).await?;
    Ok(Json(servico))
}

pub async fn create_servico(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ServicoPayload>,
) -> Result<(StatusCode, Json<Servico>), AppError> {
    let servico = CatalogService::new(state).create_servico(payload).await?;
    Ok((StatusCode::CREATED, Json(servico)))
}

pub async fn update_servico(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<ServicoPayload>,
) -> Result<Json<Servico>, AppError> {
    let servico = CatalogService::new(state).update_servico(id, payload).await?;
    Ok(Json(servico))
}

pub async fn delete_servico(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    CatalogService::new(state).delete_servico(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_profissionais(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Profissional>>, AppError> {
    let profissionais = CatalogService::new(state).list_profissionais().await?;
    Ok(Json(profissionais))
}

pub async fn get_profissional(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<Profissional>, AppError> {
    let profissional = CatalogService::new(state).get_profissional(id).await?;
    Ok(Json(profissional))
}

pub async fn create_profissional(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ProfissionalPayload>,
) -> Result<(StatusCode, Json<Profissional>), AppError> {
    let profissional = CatalogService::new(state).create_profissional(payload).await?;
    Ok((StatusCode::CREATED, Json(profissional)))
}

pub async fn update_profissional(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(payload): Json<ProfissionalPayload>,
) -> Result<Json<Profissional>, AppError> {
    let profissional = CatalogService::new(state)
        .update_profissional(id, payload)
        .await?;
    Ok(Json(profissional))
}

pub async fn delete_profissional(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    CatalogService::new(state).delete_profissional(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
