use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use shared_database::AppState;

use crate::handlers;

pub fn appointment_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/agendamentos",
            get(handlers::list_agendamentos).post(handlers::create_agendamento),
        )
        .route(
            "/agendamentos/{id}",
            axum::routing::put(handlers::update_agendamento)
                .delete(handlers::cancel_agendamento),
        )
        .route(
            "/agendamentos/paciente/{id}",
            get(handlers::list_agendamentos_por_paciente),
        )
        .route(
            "/horarios",
            get(handlers::list_horarios)
                .post(handlers::create_horario)
                .put(handlers::update_horario),
        )
        .route("/horarios/{id}", axum::routing::delete(handlers::delete_horario))
        .with_state(state)
}
