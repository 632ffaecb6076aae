//! Axum router construction.

use axum::{
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use super::{handlers, middleware, state::AppState};

/// Build the application [`Router`] with all routes and middleware attached.
///
/// Method routing gives every non-POST request to the encrypt/decrypt routes
/// a `405 Method Not Allowed` with the `Allow: POST` header; the security
/// headers layer runs on every response, including those.
pub fn build(state: AppState) -> Router {
    Router::new()
        .route("/encrypt", post(handlers::encrypt))
        .route("/encrypt/file", post(handlers::encrypt_file))
        .route("/decrypt", post(handlers::decrypt))
        .route("/health", get(handlers::health))
        .fallback(handlers::not_found)
        .layer(from_fn(middleware::secure_headers))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(middleware::REQUEST_TIMEOUT))
        .layer(DefaultBodyLimit::max(middleware::MAX_BODY_BYTES))
        .with_state(state)
}
