//! Department handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use staffhub_core::error::AppError;
use staffhub_core::types::pagination::PageResponse;
use staffhub_entity::department::{CreateDepartment, Department};
use staffhub_entity::user::UserRole;

use crate::dto::request::{CreateDepartmentRequest, UpdateDepartmentRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiResult;
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// Roles allowed to modify departments.
const WRITE_ROLES: &[UserRole] = &[UserRole::Admin, UserRole::Hr];

/// GET /api/departments
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> ApiResult<Json<ApiResponse<PageResponse<Department>>>> {
    let page = state.departments.find_all(&params.into_page_request()).await?;
    Ok(Json(ApiResponse::ok(page)))
}

/// GET /api/departments/{id}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<Department>>> {
    let dept = state
        .departments
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Department not found"))?;
    Ok(Json(ApiResponse::ok(dept)))
}

/// POST /api/departments
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateDepartmentRequest>,
) -> ApiResult<Json<ApiResponse<Department>>> {
    state.rbac.require_any(auth.roles(), WRITE_ROLES)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let dept = state
        .departments
        .create(&CreateDepartment {
            name: req.name,
            description: req.description,
        })
        .await?;
    Ok(Json(ApiResponse::ok(dept)))
}

/// PUT /api/departments/{id}
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDepartmentRequest>,
) -> ApiResult<Json<ApiResponse<Department>>> {
    state.rbac.require_any(auth.roles(), WRITE_ROLES)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let existing = state
        .departments
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("Department not found"))?;

    let name = req.name.unwrap_or(existing.name);
    let description = req.description.or(existing.description);

    let dept = state
        .departments
        .update(id, &name, description.as_deref())
        .await?
        .ok_or_else(|| AppError::not_found("Department not found"))?;
    Ok(Json(ApiResponse::ok(dept)))
}

/// DELETE /api/departments/{id}
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> ApiResult<Json<ApiResponse<MessageResponse>>> {
    state.rbac.require_any(auth.roles(), WRITE_ROLES)?;

    if !state.departments.delete(id).await? {
        return Err(AppError::not_found("Department not found").into());
    }
    Ok(Json(ApiResponse::ok(MessageResponse::new("Department deleted"))))
}
