//! Employee handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

use staffhub_core::error::AppError;
use staffhub_core::types::pagination::PageResponse;
use staffhub_entity::employee::{CreateEmployee, Employee, UpdateEmployee};
use staffhub_entity::user::UserRole;

use crate::dto::request::{CreateEmployeeRequest, UpdateEmployeeRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Roles allowed to modify employee records.
const WRITE_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Hr];

/// Optional department filter for the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmployeeFilter {
    /// Restrict results to one department.
    pub department_id: Option<Uuid>,
}

/// GET /api/employees
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<EmployeeFilter>,
) -> ApiResult<Json<ApiResponse<PageResponse<Employee>>>> {
    let page = state
        .employees
        .find_all(&params.into_page_request(), filter.department_id)
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/employees/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Employee>>> {
    let employee = state
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// POST /api/employees
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateEmployeeRequest>,
) -> ApiResult<Json<ApiResponse<Employee>>> {
    state.rbac.require_any(auth.roles(), WRITE_ROLES)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let employee = state
        .employees
        .create(&CreateEmployee {
            first_name: req.first_name,
            last_name: req.last_name,
            email: req.email,
            position: req.position,
            department_id: req.department_id,
            hired_on: req.hired_on,
            created_by: Some(auth.user_id()),
        })
        .await?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// PUT /api/employees/{id}
///
/// Partial update: absent fields keep their current values.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> ApiResult<Json<ApiResponse<Employee>>> {
    state.rbac.require_any(auth.roles(), WRITE_ROLES)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let existing = state
        .employees
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;

    let update = UpdateEmployee {
        first_name: req.first_name.unwrap_or(existing.first_name),
        last_name: req.last_name.unwrap_or(existing.last_name),
        email: req.email.unwrap_or(existing.email),
        position: req.position.or(existing.position),
        department_id: req.department_id.or(existing.department_id),
        updated_by: Some(auth.user_id()),
    };

    let employee = state
        .employees
        .update(id, &update)
        .await?
        .ok_or_else(|| AppError::not_found("Employee not found"))?;
    Ok(Json(ApiResponse::ok(employee)))
}

/// DELETE /api/employees/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.rbac.require_any(auth.roles(), WRITE_ROLES)?;

    if !state.employees.delete(id).await? {
        return Err(AppError::not_found("Employee not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new("Employee deleted"))))
}
