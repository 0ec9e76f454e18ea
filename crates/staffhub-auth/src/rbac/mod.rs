//! Role-based authorization checks.

pub mod enforcer;

pub use enforcer::RbacEnforcer;
