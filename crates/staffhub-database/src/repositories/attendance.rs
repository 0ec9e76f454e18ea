//! Attendance repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use staffhub_core::error::{AppError, ErrorKind};
use staffhub_core::result::AppResult;
use staffhub_core::types::pagination::{PageRequest, PageResponse};
use staffhub_entity::attendance::{Attendance, AttendanceStatus, CreateAttendance};

/// Repository for attendance CRUD operations.
#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    pool: PgPool,
}

impl AttendanceRepository {
    /// Create a new attendance repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an attendance record by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Attendance>> {
        sqlx::query_as::<_, Attendance>("SELECT * FROM attendance WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find attendance record", e)
            })
    }

    /// List attendance records with pagination, optionally filtered by
    /// employee.
    pub async fn find_all(
        &self,
        page: &PageRequest,
        employee_id: Option<Uuid>,
    ) -> AppResult<PageResponse<Attendance>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM attendance WHERE ($1::uuid IS NULL OR employee_id = $1)",
        )
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count attendance", e))?;

        let records = sqlx::query_as::<_, Attendance>(
            "SELECT * FROM attendance WHERE ($1::uuid IS NULL OR employee_id = $1) \
             ORDER BY work_date DESC LIMIT $2 OFFSET $3",
        )
        .bind(employee_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list attendance", e))?;

        Ok(PageResponse::new(
            records,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Insert a new attendance record.
    pub async fn create(&self, record: &CreateAttendance) -> AppResult<Attendance> {
        sqlx::query_as::<_, Attendance>(
            "INSERT INTO attendance \
             (id, employee_id, work_date, check_in, check_out, status, created_at, created_by) \
             VALUES ($1, $2, $3, $4, $5, $6, NOW(), $7) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(record.employee_id)
        .bind(record.work_date)
        .bind(record.check_in)
        .bind(record.check_out)
        .bind(record.status)
        .bind(record.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::conflict("Attendance already recorded for that employee and date")
            }
            sqlx::Error::Database(db) if db.is_foreign_key_violation() => {
                AppError::conflict("Referenced employee does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create attendance", e),
        })
    }

    /// Update the check-out time and status of an existing record. Returns
    /// the updated row, or `None` if no record with that ID exists.
    pub async fn update(
        &self,
        id: Uuid,
        check_out: Option<chrono::DateTime<chrono::Utc>>,
        status: AttendanceStatus,
    ) -> AppResult<Option<Attendance>> {
        sqlx::query_as::<_, Attendance>(
            "UPDATE attendance SET check_out = $2, status = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(check_out)
        .bind(status)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update attendance", e))
    }

    /// Delete an attendance record. Returns whether a row existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM attendance WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete attendance", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
