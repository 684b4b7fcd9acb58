use axum::{extract::State, routing::get, Json, Router};

use haze_core::content::model::Post;

use crate::error::ApiResult;
use crate::state::AppState;

/// Location-page blog posts. Read-only; the starter set is seeded at
/// startup.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/posts", get(list_posts))
}

async fn list_posts(State(state): State<AppState>) -> ApiResult<Json<Vec<Post>>> {
    Ok(Json(state.storage().list_posts().await?))
}
