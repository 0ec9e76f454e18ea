//! Employee repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_entity::employee::{CreateEmployee, Employee, UpdateEmployee};

/// Repository for employee CRUD operations.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an employee by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>("SELECT * FROM employees WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find employee", e))
    }

    /// List employees with pagination, optionally filtered by department.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        department_id: Option<Uuid>,
    ) -> AppResult<PageResponse<Employee>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM employees WHERE ($1::uuid IS NULL OR department_id = $1)",
        )
        .bind(department_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count employees", e))?;

        let employees = sqlx::query_as::<_, Employee>(
            "SELECT * FROM employees WHERE ($1::uuid IS NULL OR department_id = $1) \
             ORDER BY last_name, first_name LIMIT $2 OFFSET $3",
        )
        .bind(department_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))?;

        Ok(PageResponse::new(
            employees,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Insert a new employee.
    pub async fn create(&self, emp: &CreateEmployee) -> AppResult<Employee> {
        sqlx::query_as::<_, Employee>(
            "INSERT INTO employees \
             (id, first_name, last_name, email, position, department_id, hired_on, created_at, updated_at, created_by, updated_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, NOW(), NOW(), $8, $8) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&emp.first_name)
        .bind(&emp.last_name)
        .bind(&emp.email)
        .bind(&emp.position)
        .bind(emp.department_id)
        .bind(emp.hired_on)
        .bind(emp.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(map_employee_error)
    }

    /// Update an existing employee. Returns the updated row, or `None` if
    /// no employee with that ID exists.
    pub async fn update(&self, id: Uuid, emp: &UpdateEmployee) -> AppResult<Option<Employee>> {
        sqlx::query_as::<_, Employee>(
            "UPDATE employees SET first_name = $2, last_name = $3, email = $4, position = $5, \
             department_id = $6, updated_at = NOW(), updated_by = $7 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&emp.first_name)
        .bind(&emp.last_name)
        .bind(&emp.email)
        .bind(&emp.position)
        .bind(emp.department_id)
        .bind(emp.updated_by)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_employee_error)
    }

    /// Delete an employee. Returns whether a row existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete employee", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

/// Translate constraint violations into caller-facing conflicts.
fn map_employee_error(e: sqlx::Error) -> AppError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            AppError::conflict("Employee email is already in use")
        }
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
            AppError::conflict("Referenced department does not exist")
        }
        _ => AppError::with_source(ErrorKind::Database, "Failed to save employee", e),
    }
}
