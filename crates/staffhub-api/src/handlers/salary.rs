//! Salary handlers.
//!
//! Salary history is append-only: a record is created, listed, or deleted,
//! never edited. Every operation, reads included, is restricted to HR.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use staffhub_core::error::AppError;
use staffhub_core::types::pagination::PageResponse;
use staffhub_entity::salary::{CreateSalary, Salary};
use staffhub_entity::user::UserRole;

use crate::dto::request::CreateSalaryRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Roles allowed to access salary data at all.
const SALARY_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Hr];

/// Optional employee filter for the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SalaryFilter {
    /// Restrict results to one employee.
    pub employee_id: Option<Uuid>,
}

/// GET /api/salaries
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<SalaryFilter>,
) -> ApiResult<Json<ApiResponse<PageResponse<Salary>>>> {
    state.rbac.require_any(auth.roles(), SALARY_ROLES)?;

    let page = state
        .salaries
        .find_all(&params.into_page_request(), filter.employee_id)
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/employees/{id}/salaries
pub async fn list_for_employee(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(employee_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Salary>>>> {
    state.rbac.require_any(auth.roles(), SALARY_ROLES)?;

    let page = state
        .salaries
        .find_all(&params.into_page_request(), Some(employee_id))
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/salaries/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Salary>>> {
    state.rbac.require_any(auth.roles(), SALARY_ROLES)?;

    let salary = state
        .salaries
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Salary record not found"))?;
    Ok(Json(ApiResponse::ok(salary)))
}

/// POST /api/salaries
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSalaryRequest>,
) -> ApiResult<Json<ApiResponse<Salary>>> {
    state.rbac.require_any(auth.roles(), SALARY_ROLES)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let salary = state
        .salaries
        .create(&CreateSalary {
            employee_id: req.employee_id,
            amount_cents: req.amount_cents,
            currency: req.currency.to_uppercase(),
            effective_from: req.effective_from,
            created_by: Some(auth.user_id()),
        })
        .await?;
    Ok(Json(ApiResponse::ok(salary)))
}

/// DELETE /api/salaries/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.rbac.require_any(auth.roles(), SALARY_ROLES)?;

    if !state.salaries.delete(id).await? {
        return Err(AppError::not_found("Salary record not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new("Salary record deleted"))))
}
