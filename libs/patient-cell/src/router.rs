use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use shared_database::AppState;

use crate::handlers;

pub fn patient_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/pacientes",
            get(handlers::list_pacientes)
                .post(handlers::create_paciente)
                .put(handlers::update_paciente),
        )
        .route(
            "/pacientes/{id}",
            get(handlers::get_paciente).delete(handlers::delete_paciente),
        )
        .with_state(state)
}
