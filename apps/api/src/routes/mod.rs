pub mod health;

use axum::{middleware::from_fn_with_state, routing::get, Router};

use crate::auth;
use crate::jobs::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route(
            "/api/v1/jobs",
            get(handlers::handle_list)
                .post(handlers::handle_create)
                .delete(handlers::handle_delete)
                .fallback(handlers::handle_method_not_allowed),
        )
        .layer(from_fn_with_state(state.clone(), auth::require_admin))
        .with_state(state)
}
