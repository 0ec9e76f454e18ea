//! Attendance entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Daily attendance status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "attendance_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AttendanceStatus {
    /// Present for the working day.
    Present,
    /// Absent without leave.
    Absent,
    /// Arrived late.
    Late,
    /// On approved leave.
    Leave,
}

/// A single attendance record for one employee and one day.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendance {
    /// Unique attendance record identifier.
    pub id: Uuid,
    /// The employee this record belongs to.
    pub employee_id: Uuid,
    /// The working day.
    pub work_date: NaiveDate,
    /// Check-in time.
    pub check_in: Option<DateTime<Utc>>,
    /// Check-out time.
    pub check_out: Option<DateTime<Utc>>,
    /// Attendance status for the day.
    pub status: AttendanceStatus,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// The user who created this record (audit).
    pub created_by: Option<Uuid>,
}

/// Data required to create an attendance record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttendance {
    /// The employee this record belongs to.
    pub employee_id: Uuid,
    /// The working day.
    pub work_date: NaiveDate,
    /// Check-in time.
    pub check_in: Option<DateTime<Utc>>,
    /// Check-out time.
    pub check_out: Option<DateTime<Utc>>,
    /// Attendance status for the day.
    pub status: AttendanceStatus,
    /// The creating user's ID (audit).
    pub created_by: Option<Uuid>,
}
