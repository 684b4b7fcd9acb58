use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use haze_core::content::model::{Inquiry, NewInquiry};
use haze_core::inquiry;

use crate::auth::AdminSession;
use crate::error::ApiResult;
use crate::state::AppState;

/// Booking inquiry routes: public intake, admin-only listing.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/inquiries", get(list_inquiries).post(submit_inquiry))
}

/// POST /api/inquiries
///
/// Validate and persist a booking inquiry, then fire off the operator
/// notification. The notification is best-effort: a dispatch failure
/// is logged and never rolls back or fails the persisted inquiry.
async fn submit_inquiry(
    State(state): State<AppState>,
    Json(input): Json<NewInquiry>,
) -> ApiResult<(StatusCode, Json<Inquiry>)> {
    inquiry::validate(&input)?;
    let input = inquiry::normalized(input);
    let stored = state.storage().create_inquiry(&input).await?;

    match state.mailer() {
        Some(mailer) => {
            let mailer = mailer.clone();
            let notify = stored.clone();
            tokio::spawn(async move {
                if let Err(e) = mailer.send_inquiry_notification(&notify).await {
                    tracing::error!(inquiry_id = notify.id, "Inquiry notification failed: {e}");
                }
            });
        }
        None => tracing::info!("SMTP not configured, skipping inquiry notification"),
    }

    Ok((StatusCode::CREATED, Json(stored)))
}

/// GET /api/inquiries — admin only; oldest first.
async fn list_inquiries(
    _admin: AdminSession,
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<Inquiry>>> {
    Ok(Json(state.storage().list_inquiries().await?))
}
