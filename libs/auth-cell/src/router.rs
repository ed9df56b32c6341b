use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use shared_database::AppState;
use shared_utils::extractor::{auth_middleware, require_admin};

use crate::handlers;

pub fn auth_routes(state: Arc<AppState>) -> Router {
    let public_routes = Router::new()
        .route("/login", post(handlers::login))
        .route("/pacientes/cadastro", post(handlers::register_patient));

    let admin_routes = Router::new()
        .route("/admin/dashboard", get(handlers::admin_dashboard))
        .layer(middleware::from_fn(require_admin))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .merge(public_routes)
        .merge(admin_routes)
        .with_state(state)
}
