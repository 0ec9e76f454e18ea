//! Request DTOs with validation rules.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use staffhub_entity::attendance::AttendanceStatus;

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 64, message = "Username must be 3-64 characters"))]
    pub username: String,
    /// Password. Minimum length is enforced by the auth layer against
    /// the configured policy.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    /// Optional email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
}

/// Refresh request body. The token may instead arrive via the refresh
/// cookie; the body field is a fallback for non-browser clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token, if not supplied via cookie.
    pub refresh_token: Option<String>,
}

/// Department creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDepartmentRequest {
    /// Department name.
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
}

/// Department update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateDepartmentRequest {
    /// New name, if changing.
    #[validate(length(min = 1, max = 128, message = "Name must be 1-128 characters"))]
    pub name: Option<String>,
    /// New description, if changing.
    pub description: Option<String>,
}

/// Employee creation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateEmployeeRequest {
    /// Given name.
    #[validate(length(min = 1, max = 128, message = "First name is required"))]
    pub first_name: String,
    /// Family name.
    #[validate(length(min = 1, max = 128, message = "Last name is required"))]
    pub last_name: String,
    /// Work email, unique across employees.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Job title.
    pub position: Option<String>,
    /// Department the employee belongs to.
    pub department_id: Option<Uuid>,
    /// Hire date.
    pub hired_on: NaiveDate,
}

/// Employee update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct UpdateEmployeeRequest {
    /// Given name.
    #[validate(length(min = 1, max = 128, message = "First name cannot be empty"))]
    pub first_name: Option<String>,
    /// Family name.
    #[validate(length(min = 1, max = 128, message = "Last name cannot be empty"))]
    pub last_name: Option<String>,
    /// Work email.
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    /// Job title.
    pub position: Option<String>,
    /// Department assignment.
    pub department_id: Option<Uuid>,
}

/// Attendance record creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttendanceRequest {
    /// Employee the record belongs to.
    pub employee_id: Uuid,
    /// The work day being recorded.
    pub work_date: NaiveDate,
    /// Check-in time.
    pub check_in: Option<DateTime<Utc>>,
    /// Check-out time.
    pub check_out: Option<DateTime<Utc>>,
    /// Attendance status for the day.
    pub status: AttendanceStatus,
}

/// Attendance record update request. Absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAttendanceRequest {
    /// New check-out time, if recording one.
    pub check_out: Option<DateTime<Utc>>,
    /// New status, if changing.
    pub status: Option<AttendanceStatus>,
}

/// Salary record creation request. Salary history is append-only; a new
/// record with a later `effective_from` supersedes earlier ones.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSalaryRequest {
    /// Employee the salary belongs to.
    pub employee_id: Uuid,
    /// Amount in minor currency units (cents).
    #[validate(range(min = 0, message = "Amount cannot be negative"))]
    pub amount_cents: i64,
    /// ISO 4217 currency code.
    #[validate(length(equal = 3, message = "Currency must be a 3-letter code"))]
    pub currency: String,
    /// Date from which this salary applies.
    pub effective_from: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_login_fields_fail_validation() {
        let req = LoginRequest {
            username: String::new(),
            password: "secret".into(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn currency_code_length_is_enforced() {
        let req = CreateSalaryRequest {
            employee_id: Uuid::new_v4(),
            amount_cents: 500_000,
            currency: "EURO".into(),
            effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn negative_salary_amount_is_rejected() {
        let req = CreateSalaryRequest {
            employee_id: Uuid::new_v4(),
            amount_cents: -1,
            currency: "USD".into(),
            effective_from: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn valid_employee_request_passes() {
        let req = CreateEmployeeRequest {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            email: "ada@example.com".into(),
            position: Some("Engineer".into()),
            department_id: None,
            hired_on: NaiveDate::from_ymd_opt(2024, 6, 1).unwrap(),
        };
        assert!(req.validate().is_ok());
    }
}
