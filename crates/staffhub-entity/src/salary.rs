//! Salary entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A salary record for an employee, effective from a given date.
///
/// Amounts are stored in minor currency units (cents) to avoid floating
/// point arithmetic on money.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Salary {
    /// Unique salary record identifier.
    pub id: Uuid,
    /// The employee this salary belongs to.
    pub employee_id: Uuid,
    /// Monthly amount in minor units (cents).
    pub amount_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// The date this salary takes effect.
    pub effective_from: NaiveDate,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// The user who created this record (audit).
    pub created_by: Option<Uuid>,
}

/// Data required to create a salary record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSalary {
    /// The employee this salary belongs to.
    pub employee_id: Uuid,
    /// Monthly amount in minor units (cents).
    pub amount_cents: i64,
    /// ISO 4217 currency code.
    pub currency: String,
    /// The date this salary takes effect.
    pub effective_from: NaiveDate,
    /// The creating user's ID (audit).
    pub created_by: Option<Uuid>,
}
