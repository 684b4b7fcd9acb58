//! Router-level tests exercising the session gate and the upload path
//! end to end against a real database and the in-memory session store.

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use haze_core::storage::Storage;

use crate::config::AppConfig;
use crate::state::AppState;

const TEST_PASSWORD: &str = "hunter2";

fn test_config(uploads_dir: String) -> AppConfig {
    AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: String::new(),
        db_max_connections: 5,
        db_min_connections: 1,
        session_secret: "test-signing-secret".to_string(),
        admin_password: TEST_PASSWORD.to_string(),
        uploads_dir,
        log_level: "info".to_string(),
    }
}

fn app(pool: PgPool, uploads_dir: String) -> Router {
    std::fs::create_dir_all(&uploads_dir).expect("create uploads dir");
    let config = test_config(uploads_dir);
    let secret = config.session_secret.clone();
    crate::build_app(AppState::new(Storage::new(pool), config, None), &secret)
}

fn temp_uploads_dir(tag: &str) -> String {
    std::env::temp_dir()
        .join(format!("haze-test-uploads-{tag}-{}", std::process::id()))
        .to_string_lossy()
        .into_owned()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("body is JSON")
}

/// Log in and return the session cookie pair for follow-up requests.
async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(format!(r#"{{"password":"{TEST_PASSWORD}"}}"#)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login sets a session cookie")
        .to_str()
        .unwrap()
        .to_string();
    cookie.split(';').next().unwrap().to_string()
}

#[sqlx::test(migrations = "../../migrations")]
async fn login_establishes_admin_session_with_fixed_expiry(pool: PgPool) {
    let app = app(pool, temp_uploads_dir("login"));

    // Wrong password: 401, no session cookie.
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"password":"wrong"}"#))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    // Anonymous probe reports no admin session.
    let response = app
        .clone()
        .oneshot(
            Request::get("/api/admin/session")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["isAdmin"], false);

    // Correct password: the cookie carries an absolute expiry set at
    // login, not a sliding one refreshed per request.
    let response = app
        .clone()
        .oneshot(
            Request::post("/api/admin/login")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(format!(r#"{{"password":"{TEST_PASSWORD}"}}"#)))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login sets a session cookie")
        .to_str()
        .unwrap()
        .to_string();
    assert!(
        set_cookie.contains("Expires="),
        "session cookie should carry an absolute expiry: {set_cookie}"
    );
    let cookie_pair = set_cookie.split(';').next().unwrap().to_string();

    // The probe sees the flag through the session cookie.
    let response = app
        .clone()
        .oneshot(
            Request::get("/api/admin/session")
                .header(header::COOKIE, &cookie_pair)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["isAdmin"], true);

    // Admin-only listing accepts the cookie and rejects its absence.
    let response = app
        .clone()
        .oneshot(
            Request::get("/api/inquiries")
                .header(header::COOKIE, &cookie_pair)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = app
        .clone()
        .oneshot(
            Request::get("/api/inquiries")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../migrations")]
async fn upload_round_trips_bytes_through_the_slot(pool: PgPool) {
    let uploads_dir = temp_uploads_dir("upload");
    let app = app(pool, uploads_dir);
    let cookie_pair = login(&app).await;

    let boundary = "------------------------haze0123456789";
    let file_bytes: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a, 1, 2, 3];
    let mut body = Vec::new();
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Disposition: form-data; name=\"imageKey\"\r\n\r\nabout_photo\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; \
             filename=\"portrait.png\"\r\nContent-Type: image/png\r\n\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(file_bytes);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/admin/upload")
                .header(header::COOKIE, &cookie_pair)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let stored = body_json(response).await;
    assert_eq!(stored["imageKey"], "about_photo");
    assert_eq!(stored["originalName"], "portrait.png");

    // The slot override shows up in the public listing.
    let response = app
        .clone()
        .oneshot(
            Request::get("/api/site-images")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let images = body_json(response).await;
    let image = images
        .as_array()
        .unwrap()
        .iter()
        .find(|img| img["imageKey"] == "about_photo")
        .expect("uploaded slot listed");
    let url = image["url"].as_str().unwrap().to_string();
    assert!(url.starts_with("/uploads/"), "unexpected url: {url}");

    // Fetching the URL returns exactly the bytes that were uploaded.
    let response = app
        .clone()
        .oneshot(Request::get(url.as_str()).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let served = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    assert_eq!(&served[..], file_bytes);

    // A path with no stored file behind it is a JSON 404.
    let response = app
        .clone()
        .oneshot(
            Request::get("/uploads/does-not-exist.png")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "File not found");
}

#[sqlx::test(migrations = "../../migrations")]
async fn upload_rejects_disallowed_extension(pool: PgPool) {
    let app = app(pool, temp_uploads_dir("reject"));
    let cookie_pair = login(&app).await;

    let boundary = "------------------------haze9876543210";
    let mut body = Vec::new();
    body.extend_from_slice(
        format!("--{boundary}\r\nContent-Disposition: form-data; name=\"imageKey\"\r\n\r\nabout_photo\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(
        format!(
            "--{boundary}\r\nContent-Disposition: form-data; name=\"image\"; \
             filename=\"script.exe\"\r\nContent-Type: application/octet-stream\r\n\r\nMZ\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(format!("--{boundary}--\r\n").as_bytes());

    let response = app
        .clone()
        .oneshot(
            Request::post("/api/admin/upload")
                .header(header::COOKIE, &cookie_pair)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={boundary}"),
                )
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Nothing was recorded for the slot.
    let response = app
        .clone()
        .oneshot(
            Request::get("/api/site-images")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(body_json(response).await.as_array().unwrap().is_empty());
}
