use std::sync::Arc;

use axum::{
    routing::get,
    Router,
};

use appointment_cell::router::appointment_routes;
use auth_cell::router::auth_routes;
use catalog_cell::router::catalog_routes;
use patient_cell::router::patient_routes;
use shared_database::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    let api = Router::new()
        .merge(auth_routes(state.clone()))
        .merge(catalog_routes(state.clone()))
        .merge(patient_routes(state.clone()))
        .merge(appointment_routes(state));

    Router::new()
        .route("/", get(|| async { "FisioVital API is running!" }))
        .nest("/api", api)
}
