//! # staffhub-database
//!
//! PostgreSQL connection management, migrations, and repository
//! implementations for StaffHub. Each entity gets a repository exposing
//! the conventional interface: find-by-id, find-all-paged, save, delete.

pub mod connection;
pub mod migration;
pub mod repositories;
