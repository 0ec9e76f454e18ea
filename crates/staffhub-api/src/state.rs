//! Shared application state.

use std::sync::Arc;

use sqlx::PgPool;

use staffhub_auth::{
    CredentialStore, DbSessionStore, JwtDecoder, JwtEncoder, PasswordHasher, RbacEnforcer,
    SessionManager, SessionStore,
};
use staffhub_core::config::AppConfig;
use staffhub_database::repositories::{
    AttendanceRepository, DepartmentRepository, EmployeeRepository, SalaryRepository,
    SessionRepository, UserRepository,
};

/// Application state shared across all request handlers.
///
/// Cloning is cheap: every component is behind an [`Arc`] or is itself
/// a handle over a pooled resource.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Database connection pool.
    pub pool: PgPool,
    /// User repository.
    pub users: Arc<UserRepository>,
    /// Department repository.
    pub departments: DepartmentRepository,
    /// Employee repository.
    pub employees: EmployeeRepository,
    /// Attendance repository.
    pub attendance: AttendanceRepository,
    /// Salary repository.
    pub salaries: SalaryRepository,
    /// Access-token decoder for the request gate.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Session lifecycle orchestrator.
    pub session_manager: Arc<SessionManager>,
    /// Session store, exposed for the background cleanup task.
    pub session_store: Arc<dyn SessionStore>,
    /// Role-based access control enforcer.
    pub rbac: RbacEnforcer,
}

impl AppState {
    /// Builds the application state from configuration and a connected pool.
    pub fn new(config: AppConfig, pool: PgPool) -> Self {
        let users = Arc::new(UserRepository::new(pool.clone()));
        let sessions = Arc::new(SessionRepository::new(pool.clone()));
        let departments = DepartmentRepository::new(pool.clone());
        let employees = EmployeeRepository::new(pool.clone());
        let attendance = AttendanceRepository::new(pool.clone());
        let salaries = SalaryRepository::new(pool.clone());

        let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
        let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));
        let password_hasher = Arc::new(PasswordHasher::new());
        let session_store: Arc<dyn SessionStore> = Arc::new(DbSessionStore::new(sessions));

        let session_manager = Arc::new(SessionManager::new(
            jwt_encoder,
            Arc::clone(&jwt_decoder),
            Arc::clone(&session_store),
            Arc::clone(&users) as Arc<dyn CredentialStore>,
            password_hasher,
            config.auth.clone(),
        ));

        Self {
            config: Arc::new(config),
            pool,
            users,
            departments,
            employees,
            attendance,
            salaries,
            jwt_decoder,
            session_manager,
            session_store,
            rbac: RbacEnforcer::new(),
        }
    }
}
