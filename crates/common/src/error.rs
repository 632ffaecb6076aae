//! Common error types shared across crates.

use thiserror::Error;

/// Top-level service error type.
///
/// Variants map to HTTP status codes returned to callers:
/// - [`ServiceError::BadRequest`] → 400
/// - [`ServiceError::NotFound`] → 404
/// - [`ServiceError::Internal`] → 500
///
/// The [`Display`](std::fmt::Display) output is the exact message placed in
/// the JSON error body, so variants carry no prefix — clients receive the
/// underlying message verbatim.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller supplied bad input — a missing/empty form field, a
    /// malformed envelope, or data that fails authentication.
    #[error("{0}")]
    BadRequest(String),

    /// The requested route does not exist.
    #[error("the requested resource does not exist")]
    NotFound,

    /// An unexpected internal error occurred.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Returns the HTTP status code that should be sent for this error.
    pub fn http_status(&self) -> u16 {
        match self {
            ServiceError::BadRequest(_) => 400,
            ServiceError::NotFound => 404,
            ServiceError::Internal(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_status_codes() {
        assert_eq!(ServiceError::BadRequest("x".into()).http_status(), 400);
        assert_eq!(ServiceError::NotFound.http_status(), 404);
        assert_eq!(ServiceError::Internal("x".into()).http_status(), 500);
    }

    #[test]
    fn display_is_message_verbatim() {
        let e = ServiceError::BadRequest("message authentication failed".into());
        assert_eq!(e.to_string(), "message authentication failed");
    }
}
