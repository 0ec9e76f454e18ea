//! Auth handlers — login, refresh, logout, register, me.

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use validator::Validate;

use staffhub_auth::session::ClientInfo;
use staffhub_core::error::AppError;

use crate::dto::request::{LoginRequest, RefreshRequest, RegisterRequest};
use crate::dto::response::{ApiResponse, MessageResponse, TokenResponse, UserResponse};
use crate::error::ApiResult;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Name of the HTTP-only refresh token cookie.
const REFRESH_COOKIE: &str = "refresh_token";
/// Cookie path; scoped so the browser only sends it to auth endpoints.
const REFRESH_COOKIE_PATH: &str = "/api/auth";

/// Builds the HTTP-only refresh cookie for a freshly issued token.
fn refresh_cookie(token: String) -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, token))
        .path(REFRESH_COOKIE_PATH)
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

/// Builds the removal cookie used to clear the refresh token.
fn clear_refresh_cookie() -> Cookie<'static> {
    Cookie::build((REFRESH_COOKIE, ""))
        .path(REFRESH_COOKIE_PATH)
        .build()
}

/// Extracts client metadata recorded on the session row.
fn client_info(headers: &HeaderMap) -> ClientInfo {
    ClientInfo {
        ip_address: headers
            .get("x-forwarded-for")
            .and_then(|v| v.to_str().ok())
            .map(|v| v.split(',').next().unwrap_or(v).trim().to_string()),
        user_agent: headers
            .get("user-agent")
            .and_then(|v| v.to_str().ok())
            .map(String::from),
    }
}

/// Resolves the presented refresh token: cookie first, body fallback.
fn presented_refresh_token(jar: &CookieJar, body: &RefreshRequest) -> Option<String> {
    jar.get(REFRESH_COOKIE)
        .map(|c| c.value().to_string())
        .or_else(|| body.refresh_token.clone())
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<TokenResponse>>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .session_manager
        .login(&req.username, &req.password, client_info(&headers))
        .await?;

    let jar = jar.add(refresh_cookie(result.tokens.refresh_token.clone()));
    let body = TokenResponse::new(result.tokens, Some(UserResponse::from(result.user)));

    Ok((jar, Json(ApiResponse::ok(body))))
}

/// POST /api/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(CookieJar, Json<ApiResponse<TokenResponse>>)> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state
        .session_manager
        .register(&req.username, &req.password, req.email, client_info(&headers))
        .await?;

    let jar = jar.add(refresh_cookie(result.tokens.refresh_token.clone()));
    let body = TokenResponse::new(result.tokens, Some(UserResponse::from(result.user)));

    Ok((jar, Json(ApiResponse::ok(body))))
}

/// POST /api/auth/refresh
///
/// The refresh token is taken from the HTTP-only cookie when present,
/// falling back to the request body for non-browser clients.
pub async fn refresh(
    State(state): State<AppState>,
    jar: CookieJar,
    headers: HeaderMap,
    body: Option<Json<RefreshRequest>>,
) -> ApiResult<(CookieJar, Json<ApiResponse<TokenResponse>>)> {
    let req = body.map(|Json(b)| b).unwrap_or_default();
    let token = presented_refresh_token(&jar, &req)
        .ok_or_else(|| AppError::unauthorized("Missing refresh token"))?;

    let tokens = state
        .session_manager
        .refresh(&token, client_info(&headers))
        .await?;

    let jar = jar.add(refresh_cookie(tokens.refresh_token.clone()));
    let body = TokenResponse::new(tokens, None);

    Ok((jar, Json(ApiResponse::ok(body))))
}

/// POST /api/auth/logout
///
/// Always succeeds: revoking an absent or already-revoked session is not
/// an error, and no token is required to verify.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
    body: Option<Json<RefreshRequest>>,
) -> ApiResult<(CookieJar, Json<ApiResponse<MessageResponse>>)> {
    let req = body.map(|Json(b)| b).unwrap_or_default();

    if let Some(token) = presented_refresh_token(&jar, &req) {
        state.session_manager.logout(&token).await?;
    }

    let jar = jar.remove(clear_refresh_cookie());
    Ok((
        jar,
        Json(ApiResponse::ok(MessageResponse::new("Logged out successfully"))),
    ))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ApiResponse<UserResponse>>> {
    let user = state
        .users
        .find_by_id(auth.user_id())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ApiResponse::ok(UserResponse::from(user))))
}
