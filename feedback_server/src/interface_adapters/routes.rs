use crate::interface_adapters::handlers::{health, not_found};
use crate::interface_adapters::middleware::translate_failures;
use crate::interface_adapters::state::AppState;
use axum::{Router, middleware, routing::get};

pub fn app(state: AppState) -> Router {
    let routes = Router::new().route("/health", get(health));

    with_failure_translation(routes, state)
}

// Adds the not-found fallback and wraps every route, fallback included, in
// the failure-translation middleware. Routes added afterwards are not covered.
pub fn with_failure_translation(routes: Router, state: AppState) -> Router {
    routes
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(state, translate_failures))
}
