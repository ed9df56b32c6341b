use serde::{Deserialize, Serialize};

use shared_models::error::AppError;

/// Admin-facing patient row. The password hash is never selected into this
/// view.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct Paciente {
    pub id: i64,
    pub nome: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub historico: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreatePacientePayload {
    pub nome: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub historico: Option<String>,
}

impl CreatePacientePayload {
    pub fn validate(self) -> Result<NewPaciente, AppError> {
        let nome = match self.nome {
            Some(nome) if !nome.is_empty() => nome,
            _ => return Err(AppError::Validation("Nome é obrigatório".to_string())),
        };

        Ok(NewPaciente {
            nome,
            telefone: self.telefone,
            email: self.email,
            historico: self.historico,
        })
    }
}

#[derive(Debug)]
pub struct NewPaciente {
    pub nome: String,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub historico: Option<String>,
}

/// Whole-row update keyed by the id carried in the body, as the original API
/// shaped it.
#[derive(Debug, Deserialize)]
pub struct UpdatePacientePayload {
    pub id: Option<i64>,
    pub nome: Option<String>,
    pub telefone: Option<String>,
    pub email: Option<String>,
    pub historico: Option<String>,
}

impl UpdatePacientePayload {
    pub fn validate(self) -> Result<(i64, NewPaciente), AppError> {
        let id = self
            .id
            .ok_or_else(|| AppError::Validation("Id é obrigatório".to_string()))?;

        let nome = match self.nome {
            Some(nome) if !nome.is_empty() => nome,
            _ => return Err(AppError::Validation("Nome é obrigatório".to_string())),
        };

        Ok((
            id,
            NewPaciente {
                nome,
                telefone: self.telefone,
                email: self.email,
                historico: self.historico,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_requires_nome_only() {
        let bare = CreatePacientePayload {
            nome: Some("Ana Lima".to_string()),
            telefone: None,
            email: None,
            historico: None,
        };
        assert!(bare.validate().is_ok());

        let nameless = CreatePacientePayload {
            nome: None,
            telefone: Some("(11) 90000-0000".to_string()),
            email: None,
            historico: None,
        };
        assert!(nameless.validate().is_err());
    }

    #[test]
    fn update_requires_id() {
        let payload = UpdatePacientePayload {
            id: None,
            nome: Some("Ana Lima".to_string()),
            telefone: None,
            email: None,
            historico: None,
        };
        assert!(payload.validate().is_err());
    }
}
