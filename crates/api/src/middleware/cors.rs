use axum::http::{header, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Build the CORS layer. The admin session rides on a cookie, so
/// credentials must be allowed, which rules out wildcard origins and
/// methods.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
