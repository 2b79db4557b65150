use axum::{
    routing::{get, post},
    Router,
};

use crate::features::predictions::handlers;

/// Create routes for the predictions feature
///
/// Both models are stateless pure functions, so the router carries no state.
/// All routes are public.
pub fn routes() -> Router {
    Router::new()
        .route(
            "/api/predictions/heuristic",
            post(handlers::assess_heuristic),
        )
        .route(
            "/api/predictions/heuristic/parameters",
            get(handlers::heuristic_parameters),
        )
        .route("/api/predictions/gumbel", post(handlers::assess_gumbel))
        .route(
            "/api/predictions/gumbel/parameters",
            get(handlers::gumbel_parameters),
        )
}
