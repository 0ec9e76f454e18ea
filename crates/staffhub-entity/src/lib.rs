//! # staffhub-entity
//!
//! Domain entity models for StaffHub: users and roles, sessions,
//! departments, employees, attendance records, and salary records.
//!
//! Entities derive `sqlx::FromRow` for repository mapping and `serde`
//! for API serialization.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod salary;
pub mod session;
pub mod user;

pub use attendance::{Attendance, AttendanceStatus};
pub use department::Department;
pub use employee::Employee;
pub use salary::Salary;
pub use session::Session;
pub use user::{User, UserRole};
