//! Route definitions for the StaffHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The
//! router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{delete, get, post, put},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(department_routes())
        .merge(employee_routes())
        .merge(attendance_routes())
        .merge(salary_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(
            middleware::logging::request_logging,
        ))
        .with_state(state)
}

/// Auth endpoints: login, register, refresh, logout, me.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/register", post(handlers::auth::register))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Department CRUD.
fn department_routes() -> Router<AppState> {
    Router::new()
        .route("/departments", get(handlers::department::list))
        .route("/departments", post(handlers::department::create))
        .route("/departments/{id}", get(handlers::department::get))
        .route("/departments/{id}", put(handlers::department::update))
        .route("/departments/{id}", delete(handlers::department::delete))
}

/// Employee CRUD plus nested attendance/salary listings.
fn employee_routes() -> Router<AppState> {
    Router::new()
        .route("/employees", get(handlers::employee::list))
        .route("/employees", post(handlers::employee::create))
        .route("/employees/{id}", get(handlers::employee::get))
        .route("/employees/{id}", put(handlers::employee::update))
        .route("/employees/{id}", delete(handlers::employee::delete))
        .route(
            "/employees/{id}/attendance",
            get(handlers::attendance::list_for_employee),
        )
        .route(
            "/employees/{id}/salaries",
            get(handlers::salary::list_for_employee),
        )
}

/// Attendance record CRUD.
fn attendance_routes() -> Router<AppState> {
    Router::new()
        .route("/attendance", get(handlers::attendance::list))
        .route("/attendance", post(handlers::attendance::create))
        .route("/attendance/{id}", put(handlers::attendance::update))
        .route("/attendance/{id}", delete(handlers::attendance::delete))
}

/// Salary record endpoints (append-only history).
fn salary_routes() -> Router<AppState> {
    Router::new()
        .route("/salaries", get(handlers::salary::list))
        .route("/salaries", post(handlers::salary::create))
        .route("/salaries/{id}", get(handlers::salary::get))
        .route("/salaries/{id}", delete(handlers::salary::delete))
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}

/// Build the CORS layer from configuration. An empty origin list allows
/// any origin, which suits local development defaults.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    let origins = &state.config.server.cors_origins;

    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any);

    if origins.is_empty() || origins.contains(&"*".to_string()) {
        cors.allow_origin(Any)
    } else {
        let parsed: Vec<axum::http::HeaderValue> =
            origins.iter().filter_map(|o| o.parse().ok()).collect();
        cors.allow_origin(parsed)
    }
}
