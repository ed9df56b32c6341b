use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Servico {
    pub id: i64,
    pub nome: String,
    pub duracao: i32,
    pub preco: f64,
}

#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Profissional {
    pub id: i64,
    pub nome: String,
    pub especialidade: String,
}

/// Create and update share the same required-field set.
#[derive(Debug, Deserialize)]
pub struct ServicoPayload {
    pub nome: Option<String>,
    pub duracao: Option<i32>,
    pub preco: Option<f64>,
}

impl ServicoPayload {
    pub fn validate(self) -> Result<(String, i32, f64), AppError> {
        match (self.nome, self.duracao, self.preco) {
            (Some(nome), Some(duracao), Some(preco)) if !nome.is_empty() => {
                Ok((nome, duracao, preco))
            }
            _ => Err(AppError::Validation(
                "Nome, duração e preço são obrigatórios".to_string(),
            )),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ProfissionalPayload {
    pub nome: Option<String>,
    pub especialidade: Option<String>,
}

impl ProfissionalPayload {
    pub fn validate(self) -> Result<(String, String), AppError> {
        match (self.nome, self.especialidade) {
            (Some(nome), Some(especialidade)) if !nome.is_empty() && !especialidade.is_empty() => {
                Ok((nome, especialidade))
            }
            _ => Err(AppError::Validation(
                "Nome e especialidade são obrigatórios".to_string(),
            )),
        }
    }
}
