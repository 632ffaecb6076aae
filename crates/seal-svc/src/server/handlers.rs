//! Axum request handlers for all service endpoints.

use axum::{
    extract::{Multipart, RawForm, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use common::protocol::{ErrorResponse, FileEncryptResponse, HealthResponse};
use common::ServiceError;
use percent_encoding::percent_decode;
use tracing::{error, info};

use super::state::AppState;

const MISSING_PLAINTEXT: &str = "text to encrypt was not supplied in the request or was empty.";
const MISSING_CIPHERTEXT: &str = "Encrypted text was not supplied or was empty.";
const MISSING_UPLOAD: &str = "file could not be retrieved as none was supplied.";

/// Extract a named value from a urlencoded body at the byte level.
///
/// Envelope and plaintext bytes are arbitrary binary, so the value must
/// never pass through a lossy UTF-8 string: `+` maps to space and percent
/// escapes decode to raw bytes.
fn form_value(body: &[u8], key: &str) -> Option<Vec<u8>> {
    body.split(|&b| b == b'&').find_map(|pair| {
        let mut parts = pair.splitn(2, |&b| b == b'=');
        if parts.next()? != key.as_bytes() {
            return None;
        }
        let value: Vec<u8> = parts
            .next()
            .unwrap_or_default()
            .iter()
            .map(|&b| if b == b'+' { b' ' } else { b })
            .collect();
        Some(percent_decode(&value).collect())
    })
}

/// `POST /encrypt` — seal the `data` form field.
///
/// Responds `200 OK` with the raw envelope bytes as
/// `text/plain; charset=utf-8`. A missing or empty field, or a codec
/// failure, yields `400` with a JSON error body.
pub async fn encrypt(State(state): State<AppState>, form: Option<RawForm>) -> Response {
    let plaintext = match form.and_then(|RawForm(body)| form_value(&body, "data")) {
        Some(data) if !data.is_empty() => data,
        _ => return reject(ServiceError::BadRequest(MISSING_PLAINTEXT.into())),
    };

    match state.cipher.seal(&plaintext) {
        Ok(envelope) => {
            info!(data = %preview(&plaintext), "encrypted text");
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                envelope,
            )
                .into_response()
        }
        Err(e) => reject(ServiceError::BadRequest(e.to_string())),
    }
}

/// `POST /decrypt` — open the envelope submitted in the `data` form field.
///
/// Responds `200 OK` with the raw plaintext bytes, no forced content type.
/// Malformed or unauthenticated envelopes yield `400` with the codec error
/// message verbatim; corruption, wrong key, and tampering are deliberately
/// indistinguishable.
pub async fn decrypt(State(state): State<AppState>, form: Option<RawForm>) -> Response {
    let envelope = match form.and_then(|RawForm(body)| form_value(&body, "data")) {
        Some(data) if !data.is_empty() => data,
        _ => return reject(ServiceError::BadRequest(MISSING_CIPHERTEXT.into())),
    };

    match state.cipher.open(&envelope) {
        Ok(plaintext) => {
            info!(data = %preview(&plaintext), "decrypted text");
            plaintext.into_response()
        }
        Err(e) => reject(ServiceError::BadRequest(e.to_string())),
    }
}

/// `POST /encrypt/file` — seal an uploaded file (multipart field
/// `upload_file`).
///
/// Responds `200 OK` with a JSON body carrying the original text, both
/// lengths, and the base64-encoded envelope.
pub async fn encrypt_file(State(state): State<AppState>, mut multipart: Multipart) -> Response {
    let mut upload = None;
    loop {
        let field = match multipart.next_field().await {
            Ok(Some(field)) => field,
            Ok(None) => break,
            Err(e) => {
                return reject(ServiceError::BadRequest(format!(
                    "could not upload file. {e}"
                )))
            }
        };
        if field.name() == Some("upload_file") {
            match field.bytes().await {
                Ok(bytes) => {
                    upload = Some(bytes);
                    break;
                }
                Err(e) => {
                    return reject(ServiceError::BadRequest(format!(
                        "could not upload file. {e}"
                    )))
                }
            }
        }
    }

    let data = match upload {
        Some(bytes) if !bytes.is_empty() => bytes,
        _ => return reject(ServiceError::BadRequest(MISSING_UPLOAD.into())),
    };

    match state.cipher.seal(&data) {
        Ok(envelope) => {
            info!(
                original_len = data.len(),
                encrypted_len = envelope.len(),
                "encrypted uploaded file"
            );
            (
                StatusCode::OK,
                Json(FileEncryptResponse::new(&data, &envelope)),
            )
                .into_response()
        }
        Err(e) => reject(ServiceError::BadRequest(e.to_string())),
    }
}

/// `GET /health` — liveness check.
///
/// The cipher context exists for the whole process lifetime, so the service
/// is ready as soon as it accepts connections.
pub async fn health() -> Response {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "ok".into(),
        }),
    )
        .into_response()
}

/// Catch-all 404 handler.
pub async fn not_found() -> impl IntoResponse {
    let err = ServiceError::NotFound;
    let status = StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::NOT_FOUND);
    (status, Json(ErrorResponse::new(err.to_string())))
}

/// Translate a [`ServiceError`] into its JSON error response.
fn reject(err: ServiceError) -> Response {
    error!(error = %err, "request rejected");
    let status =
        StatusCode::from_u16(err.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(ErrorResponse::new(err.to_string()))).into_response()
}

const PREVIEW_LEN: usize = 32;

/// Truncated, lossy view of request data for informational logs.
fn preview(data: &[u8]) -> String {
    let shown = &data[..data.len().min(PREVIEW_LEN)];
    let mut text = String::from_utf8_lossy(shown).into_owned();
    if data.len() > PREVIEW_LEN {
        text.push('…');
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_value_decodes_arbitrary_bytes() {
        // Percent escapes must decode to raw bytes, not lossy UTF-8.
        let body = b"data=%FF%00%ABtail";
        assert_eq!(
            form_value(body, "data").unwrap(),
            vec![0xFF, 0x00, 0xAB, b't', b'a', b'i', b'l']
        );
    }

    #[test]
    fn form_value_maps_plus_to_space() {
        assert_eq!(
            form_value(b"data=Here+is+the+test+data.%0A", "data").unwrap(),
            b"Here is the test data.\n"
        );
    }

    #[test]
    fn form_value_picks_named_field_among_pairs() {
        let body = b"other=x&data=hello&more=y";
        assert_eq!(form_value(body, "data").unwrap(), b"hello");
    }

    #[test]
    fn form_value_missing_key_is_none() {
        assert!(form_value(b"other=x", "data").is_none());
        assert!(form_value(b"", "data").is_none());
    }

    #[test]
    fn form_value_empty_value_is_empty() {
        assert_eq!(form_value(b"data=", "data").unwrap(), b"");
    }

    #[test]
    fn preview_truncates_long_data() {
        let data = vec![b'a'; 100];
        let p = preview(&data);
        assert!(p.starts_with("aaaa"));
        assert!(p.ends_with('…'));
        assert_eq!(p.chars().count(), PREVIEW_LEN + 1);
    }

    #[test]
    fn preview_keeps_short_data_intact() {
        assert_eq!(preview(b"hello"), "hello");
    }

    #[test]
    fn preview_is_lossy_on_binary() {
        let p = preview(&[0xFF, 0xFE, b'x']);
        assert!(p.ends_with('x'));
    }
}
