//! # staffhub-api
//!
//! HTTP API layer for StaffHub built on Axum.
//!
//! Provides the auth endpoints (login, refresh, logout, register, me),
//! the CRUD endpoints for departments, employees, attendance, and
//! salaries, the request-gate extractor, middleware, DTOs, and error
//! mapping.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
