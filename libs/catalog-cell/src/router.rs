use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use shared_database::AppState;

use crate::handlers;

pub fn catalog_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/servicos",
            get(handlers::list_servicos).post(handlers::create_servico),
        )
        .route(
            "/servicos/{id}",
            get(handlers::get_servico)
                .put(handlers::update_servico)
                .delete(handlers::delete_servico),
        )
        .route(
            "/profissionais",
            get(handlers::list_profissionais).post(handlers::create_profissional),
        )
        .route(
            "/profissionais/{id}",
            get(handlers::get_profissional)
                .put(handlers::update_profissional)
                .delete(handlers::delete_profissional),
        )
        .with_state(state)
}
