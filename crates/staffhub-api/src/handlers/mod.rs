//! HTTP request handlers.

pub mod attendance;
pub mod auth;
pub mod department;
pub mod employee;
pub mod health;
pub mod salary;
