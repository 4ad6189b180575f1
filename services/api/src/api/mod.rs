//! HTTP API handlers and routing.

mod generate;
mod health;

use axum::{
    http::{header, Method},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main API router with all routes and middleware.
pub fn create_router() -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // Health endpoints
        .merge(health::routes())
        // Form page + generation endpoint
        .merge(generate::routes())
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
