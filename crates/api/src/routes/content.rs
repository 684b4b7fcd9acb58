use std::collections::BTreeMap;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use haze_core::content::model::{ContentRecord, EventType, UpsertContent};
use haze_core::content::resolve::{resolve_all_event_content, resolve_event_content, EventContent};

use crate::auth::AdminSession;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Section content routes: the two raw keyspaces the admin editor
/// writes through, plus the resolved per-event bundles pages render.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/corporate-content",
            get(list_corporate_content).post(upsert_corporate_content),
        )
        .route("/api/site-content", get(list_site_content))
        .route("/api/admin/site-content", post(upsert_site_content))
        .route("/api/event-content", get(all_event_content))
        .route("/api/event-content/{event_type}", get(event_content))
}

fn check_upsert(input: &UpsertContent) -> Result<(), ApiError> {
    if input.section_key.trim().is_empty() {
        return Err(ApiError::Validation {
            field: "sectionKey",
            message: "Section key is required".to_string(),
        });
    }
    if !input.content.is_object() {
        return Err(ApiError::Validation {
            field: "content",
            message: "Content must be a JSON object".to_string(),
        });
    }
    Ok(())
}

/// GET /api/corporate-content — the full event-page record set,
/// unfiltered; resolution happens against this whole set.
async fn list_corporate_content(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<ContentRecord>>> {
    Ok(Json(state.storage().list_corporate_content().await?))
}

/// POST /api/corporate-content — admin-only section write. The stored
/// value is replaced wholesale; partial edits must write back the full
/// section object.
async fn upsert_corporate_content(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<UpsertContent>,
) -> ApiResult<Json<ContentRecord>> {
    check_upsert(&input)?;
    let record = state.storage().upsert_corporate_content(&input).await?;
    tracing::info!(section_key = %record.section_key, "Section content saved");
    Ok(Json(record))
}

/// GET /api/site-content — the generic site-wide keyspace.
async fn list_site_content(State(state): State<AppState>) -> ApiResult<Json<Vec<ContentRecord>>> {
    Ok(Json(state.storage().list_site_content().await?))
}

/// POST /api/admin/site-content
async fn upsert_site_content(
    _admin: AdminSession,
    State(state): State<AppState>,
    Json(input): Json<UpsertContent>,
) -> ApiResult<Json<ContentRecord>> {
    check_upsert(&input)?;
    let record = state.storage().upsert_site_content(&input).await?;
    tracing::info!(section_key = %record.section_key, "Site content saved");
    Ok(Json(record))
}

/// GET /api/event-content/{event_type} — stored overrides overlaid on
/// the compiled-in defaults for one page.
async fn event_content(
    State(state): State<AppState>,
    Path(event_type): Path<String>,
) -> ApiResult<Json<EventContent>> {
    let event = EventType::parse(&event_type)
        .ok_or_else(|| ApiError::BadRequest(format!("unknown event type: {event_type}")))?;
    let records = state.storage().list_corporate_content().await?;
    Ok(Json(resolve_event_content(event, &records)))
}

/// GET /api/event-content — all four event types resolved in one pass,
/// for admin views that show every page at once.
async fn all_event_content(
    State(state): State<AppState>,
) -> ApiResult<Json<BTreeMap<EventType, EventContent>>> {
    let records = state.storage().list_corporate_content().await?;
    Ok(Json(resolve_all_event_content(&records)))
}
