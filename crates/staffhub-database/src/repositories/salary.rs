//! Salary repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_entity::salary::{CreateSalary, Salary};

/// Repository for salary CRUD operations.
#[derive(Debug, Clone)]
pub struct SalaryRepository {
    pool: PgPool,
}

impl SalaryRepository {
    /// Create a new salary repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a salary record by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Salary>> {
        sqlx::query_as::<_, Salary>("SELECT * FROM salaries WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find salary", e))
    }

    /// List salary records with pagination, optionally filtered by employee.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        employee_id: Option<Uuid>,
    ) -> AppResult<PageResponse<Salary>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM salaries WHERE ($1::uuid IS NULL OR employee_id = $1)",
        )
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count salaries", e))?;

        let salaries = sqlx::query_as::<_, Salary>(
            "SELECT * FROM salaries WHERE ($1::uuid IS NULL OR employee_id = $1) \
             ORDER BY effective_from DESC LIMIT $2 OFFSET $3",
        )
        .bind(employee_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list salaries", e))?;

        Ok(PageResponse::new(
            salaries,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Insert a new salary record.
    pub async fn create(&self, salary: &CreateSalary) -> AppResult<Salary> {
        sqlx::query_as::<_, Salary>(
            "INSERT INTO salaries \
             (id, employee_id, amount_cents, currency, effective_from, created_at, created_by) \
             VALUES ($1, $2, $3, $4, $5, NOW(), $6) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(salary.employee_id)
        .bind(salary.amount_cents)
        .bind(&salary.currency)
        .bind(salary.effective_from)
        .bind(salary.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::conflict("Referenced employee does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create salary", e),
        })
    }

    /// Delete a salary record. Returns whether a row existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM salaries WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete salary", e))?;
        Ok(result.rows_affected() > 0)
    }
}
