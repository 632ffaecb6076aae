//! Axum middleware applied to the router.
//!
//! Includes request tracing, timeout enforcement, and the security response
//! headers set on every response.

use std::time::Duration;

use axum::{
    extract::Request,
    http::{header, HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Default per-request timeout applied to all routes.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Maximum accepted request body size (32 MiB, matching the multipart
/// upload limit).
pub const MAX_BODY_BYTES: usize = 32 << 20;

const X_XSS_PROTECTION: HeaderName = HeaderName::from_static("x-xss-protection");

/// Set the minimum required security headers on every response, including
/// error and 405 responses produced by the method router.
pub async fn secure_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;
    let headers = response.headers_mut();
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'self';"),
    );
    headers.insert(
        header::REFERRER_POLICY,
        HeaderValue::from_static("origin-when-cross-origin"),
    );
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("deny"));
    headers.insert(X_XSS_PROTECTION, HeaderValue::from_static("0"));
    response
}
