use axum::{extract::State, routing::get, routing::post, Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use tower_sessions::cookie::time::{Duration, OffsetDateTime};
use tower_sessions::{Expiry, Session};

use crate::auth::{password_matches, IS_ADMIN_KEY};
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Admin sessions expire 24 hours after login, regardless of activity.
const SESSION_TTL_HOURS: i64 = 24;

/// Admin session routes: login, logout, and the session probe the
/// editor UI uses to decide between the login form and the editor.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/login", post(login))
        .route("/api/admin/logout", post(logout))
        .route("/api/admin/session", get(session_state))
}

#[derive(Debug, Deserialize)]
struct LoginRequest {
    password: String,
}

/// POST /api/admin/login
///
/// Shared-secret login. On mismatch the session stays anonymous.
async fn login(
    session: Session,
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<Value>> {
    if !password_matches(&body.password, &state.config().admin_password) {
        return Err(ApiError::InvalidCredentials);
    }

    // Fixed TTL from the moment of login; activity does not extend it.
    session.set_expiry(Some(Expiry::AtDateTime(
        OffsetDateTime::now_utc() + Duration::hours(SESSION_TTL_HOURS),
    )));
    session
        .insert(IS_ADMIN_KEY, true)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!("Admin session established");
    Ok(Json(json!({ "success": true })))
}

/// POST /api/admin/logout
///
/// Unconditionally destroys the session.
async fn logout(session: Session) -> ApiResult<Json<Value>> {
    session
        .flush()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(json!({ "success": true })))
}

/// GET /api/admin/session
///
/// Read-only probe of the current session state. An expired session
/// simply reads as anonymous.
async fn session_state(session: Session) -> ApiResult<Json<Value>> {
    let is_admin = session
        .get::<bool>(IS_ADMIN_KEY)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?
        .unwrap_or(false);

    Ok(Json(json!({ "isAdmin": is_admin })))
}
