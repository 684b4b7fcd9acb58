pub mod admin;
pub mod content;
pub mod health;
pub mod images;
pub mod inquiries;
pub mod posts;

use axum::handler::HandlerWithoutStateExt;
use axum::Router;
use tower_http::services::ServeDir;

use crate::error::ApiError;
use crate::state::AppState;

/// 404 body for /uploads paths with no stored file behind them.
async fn uploads_not_found() -> ApiError {
    ApiError::NotFound("File not found".to_string())
}

/// Assemble the full router with all route groups. Uploaded files are
/// served straight from the uploads directory; an absent file is a 404.
pub fn build_router(state: AppState) -> Router {
    let uploads = ServeDir::new(&state.config().uploads_dir)
        .not_found_service(uploads_not_found.into_service());

    Router::new()
        .merge(health::routes())
        .merge(admin::routes())
        .merge(content::routes())
        .merge(inquiries::routes())
        .merge(images::routes())
        .merge(posts::routes())
        .nest_service("/uploads", uploads)
        .with_state(state)
}
