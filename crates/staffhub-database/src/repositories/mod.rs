//! Repository implementations, one per entity.

pub mod attendance;
pub mod department;
pub mod employee;
pub mod salary;
pub mod session;
pub mod user;

pub use attendance::AttendanceRepository;
pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use salary::SalaryRepository;
pub use session::{RotateOutcome, SessionRepository};
pub use user::UserRepository;
