use std::path::Path as FsPath;

use axum::{
    extract::{DefaultBodyLimit, Multipart, Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use serde_json::{json, Value};

use haze_core::content::model::{NewSiteImage, SiteImage};
use haze_core::images::{is_allowed_file, slot, unique_filename, MAX_UPLOAD_BYTES, SLOT_REGISTRY};
use tokio::io::AsyncWriteExt;

use crate::auth::AdminSession;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Image slot routes: public listing of overrides, admin upload and
/// delete. Deleting reverts a slot to its compiled-in default, which is
/// never persisted.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/site-images", get(list_images))
        .route("/api/image-slots", get(list_slots))
        .route(
            "/api/admin/upload",
            post(upload_image)
                // Multipart framing overhead on top of the 20 MiB file cap.
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 1024 * 1024)),
        )
        .route("/api/admin/site-images/{image_key}", delete(delete_image))
}

/// GET /api/site-images — all current slot overrides; slots without an
/// override are simply absent.
async fn list_images(State(state): State<AppState>) -> ApiResult<Json<Vec<SiteImage>>> {
    Ok(Json(state.storage().list_site_images().await?))
}

/// GET /api/image-slots — the fixed slot registry with each slot's
/// current URL: the stored override when one exists, otherwise the
/// compiled-in default asset.
async fn list_slots(State(state): State<AppState>) -> ApiResult<Json<Value>> {
    let overrides = state.storage().list_site_images().await?;

    let slots: Vec<Value> = SLOT_REGISTRY
        .iter()
        .map(|slot| {
            let stored = overrides.iter().find(|img| img.image_key == slot.key);
            json!({
                "key": slot.key,
                "defaultAsset": slot.default_asset,
                "url": stored.map(|img| img.url.as_str()).unwrap_or(slot.default_asset),
                "overridden": stored.is_some(),
            })
        })
        .collect();

    Ok(Json(json!(slots)))
}

/// POST /api/admin/upload
///
/// Multipart body: an `image` file field plus an `imageKey` text field.
/// The file streams to the uploads directory under a stamped filename
/// as its chunks arrive, and the slot record is upserted to point at
/// it. An existing record for the key is overwritten; the previous
/// file stays on disk.
async fn upload_image(
    _admin: AdminSession,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<Json<SiteImage>> {
    let mut image_key: Option<String> = None;
    // (original filename, stored filename)
    let mut stored_file: Option<(String, String)> = None;

    while let Some(mut field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.to_string()))?
    {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("imageKey") => {
                let value = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(e.to_string()))?;
                image_key = Some(value);
            }
            Some("image") if stored_file.is_none() => {
                let original_name = field
                    .file_name()
                    .ok_or_else(|| {
                        ApiError::UploadRejected("uploaded file has no filename".to_string())
                    })?
                    .to_string();
                if !is_allowed_file(&original_name) {
                    return Err(ApiError::UploadRejected(
                        "Only image and video files are allowed".to_string(),
                    ));
                }

                let filename =
                    unique_filename(&original_name, chrono::Utc::now().timestamp_millis());
                let dest = FsPath::new(&state.config().uploads_dir).join(&filename);
                stream_field_to_file(&mut field, &dest).await?;
                stored_file = Some((original_name, filename));
            }
            _ => {}
        }
    }

    let image_key = match image_key.filter(|k| !k.trim().is_empty()) {
        Some(key) => key,
        None => {
            if let Some((_, filename)) = &stored_file {
                let path = FsPath::new(&state.config().uploads_dir).join(filename);
                let _ = tokio::fs::remove_file(&path).await;
            }
            return Err(ApiError::BadRequest("imageKey is required".to_string()));
        }
    };
    let (original_name, filename) =
        stored_file.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;

    if slot(&image_key).is_none() {
        // Storage accepts any key, but only registry slots are ever
        // surfaced by the site.
        tracing::warn!(image_key = %image_key, "Upload for a key outside the slot registry");
    }

    let stored = state
        .storage()
        .upsert_site_image(&NewSiteImage {
            image_key: image_key.clone(),
            url: format!("/uploads/{filename}"),
            original_name: Some(original_name),
        })
        .await?;

    tracing::info!(image_key = %image_key, filename = %filename, "Image uploaded");
    Ok(Json(stored))
}

/// Stream one multipart field to `dest` chunk by chunk, enforcing the
/// size cap as bytes arrive. The partial file is removed on rejection
/// so an oversized upload leaves nothing behind.
async fn stream_field_to_file(
    field: &mut axum::extract::multipart::Field<'_>,
    dest: &FsPath,
) -> Result<(), ApiError> {
    let mut out = tokio::fs::File::create(dest)
        .await
        .map_err(|e| ApiError::Internal(format!("failed to store upload: {e}")))?;
    let mut written: usize = 0;

    loop {
        let chunk = match field.chunk().await {
            Ok(Some(chunk)) => chunk,
            Ok(None) => break,
            Err(e) => {
                drop(out);
                let _ = tokio::fs::remove_file(dest).await;
                return Err(ApiError::BadRequest(e.to_string()));
            }
        };

        written += chunk.len();
        if written > MAX_UPLOAD_BYTES {
            drop(out);
            let _ = tokio::fs::remove_file(dest).await;
            return Err(ApiError::UploadRejected(
                "File exceeds the 20 MiB upload limit".to_string(),
            ));
        }

        if let Err(e) = out.write_all(&chunk).await {
            drop(out);
            let _ = tokio::fs::remove_file(dest).await;
            return Err(ApiError::Internal(format!("failed to store upload: {e}")));
        }
    }

    out.flush()
        .await
        .map_err(|e| ApiError::Internal(format!("failed to store upload: {e}")))?;
    Ok(())
}

/// DELETE /api/admin/site-images/{image_key}
///
/// Removes the stored file (if any) and the slot record. Deleting a
/// key with no override is a no-op success.
async fn delete_image(
    _admin: AdminSession,
    State(state): State<AppState>,
    Path(image_key): Path<String>,
) -> ApiResult<Json<Value>> {
    if let Some(existing) = state.storage().get_site_image(&image_key).await? {
        if let Some(filename) = existing.url.rsplit('/').next() {
            let path = FsPath::new(&state.config().uploads_dir).join(filename);
            if let Err(e) = tokio::fs::remove_file(&path).await {
                // The record still goes; a missing file just means
                // there is nothing to clean up.
                tracing::warn!(image_key = %image_key, "Could not remove stored file: {e}");
            }
        }
        state.storage().delete_site_image(&image_key).await?;
        tracing::info!(image_key = %image_key, "Image override deleted");
    }

    Ok(Json(json!({ "success": true })))
}
