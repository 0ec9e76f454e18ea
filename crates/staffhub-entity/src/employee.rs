//! Employee entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// An employee record.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    /// Unique employee identifier.
    pub id: Uuid,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Work email address.
    pub email: String,
    /// Job title.
    pub position: Option<String>,
    /// Department association.
    pub department_id: Option<Uuid>,
    /// Hire date.
    pub hired_on: NaiveDate,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
    /// The user who created this record (audit).
    pub created_by: Option<Uuid>,
    /// The user who last updated this record (audit).
    pub updated_by: Option<Uuid>,
}

/// Data required to create an employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEmployee {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Work email address.
    pub email: String,
    /// Job title.
    pub position: Option<String>,
    /// Department association.
    pub department_id: Option<Uuid>,
    /// Hire date.
    pub hired_on: NaiveDate,
    /// The creating user's ID (audit).
    pub created_by: Option<Uuid>,
}

/// Data for updating an existing employee.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateEmployee {
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Work email address.
    pub email: String,
    /// Job title.
    pub position: Option<String>,
    /// Department association.
    pub department_id: Option<Uuid>,
    /// The updating user's ID (audit).
    pub updated_by: Option<Uuid>,
}
