//! Attendance handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use uuid::Uuid;

use staffhub_core::error::AppError;
use staffhub_core::types::pagination::PageResponse;
use staffhub_entity::attendance::{Attendance, CreateAttendance};
use staffhub_entity::user::UserRole;

use crate::dto::request::{CreateAttendanceRequest, UpdateAttendanceRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Roles allowed to record and modify attendance.
const WRITE_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Hr, UserRole::Manager];

/// Optional employee filter for the list endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceFilter {
    /// Restrict results to one employee.
    pub employee_id: Option<Uuid>,
}

/// GET /api/attendance
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<AttendanceFilter>,
) -> ApiResult<Json<ApiResponse<PageResponse<Attendance>>>> {
    let page = state
        .attendance
        .find_all(&params.into_page_request(), filter.employee_id)
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/employees/{id}/attendance
pub async fn list_for_employee(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(employee_id): Path<Uuid>,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Attendance>>>> {
    let page = state
        .attendance
        .find_all(&params.into_page_request(), Some(employee_id))
        .await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// POST /api/attendance
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateAttendanceRequest>,
) -> ApiResult<Json<ApiResponse<Attendance>>> {
    state.rbac.require_any(auth.roles(), WRITE_ROLES)?;

    let record = state
        .attendance
        .create(&CreateAttendance {
            employee_id: req.employee_id,
            work_date: req.work_date,
            check_in: req.check_in,
            check_out: req.check_out,
            status: req.status,
            created_by: Some(auth.user_id()),
        })
        .await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// PUT /api/attendance/{id}
///
/// Partial update: absent fields keep their current values.
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateAttendanceRequest>,
) -> ApiResult<Json<ApiResponse<Attendance>>> {
    state.rbac.require_any(auth.roles(), WRITE_ROLES)?;

    let existing = state
        .attendance
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Attendance record not found"))?;

    let check_out = req.check_out.or(existing.check_out);
    let status = req.status.unwrap_or(existing.status);

    let record = state
        .attendance
        .update(id, check_out, status)
        .await?
        .ok_or_else(|| AppError::not_found("Attendance record not found"))?;
    Ok(Json(ApiResponse::ok(record)))
}

/// DELETE /api/attendance/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.rbac.require_any(auth.roles(), WRITE_ROLES)?;

    if !state.attendance.delete(id).await? {
        return Err(AppError::not_found("Attendance record not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Attendance record deleted",
    ))))
}
