//! Response bodies serialised as JSON over the public HTTP API.
//!
//! Field names are PascalCase on the wire (`Error`, `Message`,
//! `OriginalText`, ...) to stay compatible with existing clients of the
//! service.

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Error response
// ---------------------------------------------------------------------------

/// Standard error body returned on any non-2xx status:
/// `{"Error": true, "Message": "..."}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorResponse {
    /// Always `true` in an error body.
    pub error: bool,
    /// Human-readable description safe to expose to callers.
    pub message: String,
}

impl ErrorResponse {
    /// Construct an [`ErrorResponse`] from a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: true,
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// File-upload encrypt endpoint
// ---------------------------------------------------------------------------

/// Successful response body for `POST /encrypt/file`.
///
/// `EncryptedText` is the sealed envelope (`nonce ‖ ciphertext ‖ tag`)
/// encoded as standard base64, the JSON convention for byte payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FileEncryptResponse {
    /// The uploaded plaintext, lossily decoded as UTF-8.
    pub original_text: String,
    /// Byte length of the uploaded plaintext.
    pub original_text_length: u64,
    /// Byte length of the sealed envelope.
    pub encrypted_text_length: u64,
    /// Base64-encoded envelope.
    pub encrypted_text: String,
}

impl FileEncryptResponse {
    /// Build a response from the uploaded plaintext and its sealed envelope.
    pub fn new(original: &[u8], envelope: &[u8]) -> Self {
        Self {
            original_text: String::from_utf8_lossy(original).into_owned(),
            original_text_length: original.len() as u64,
            encrypted_text_length: envelope.len() as u64,
            encrypted_text: STANDARD.encode(envelope),
        }
    }

    /// Decode the `EncryptedText` field back to raw envelope bytes.
    pub fn envelope_bytes(&self) -> Result<Vec<u8>, base64::DecodeError> {
        STANDARD.decode(&self.encrypted_text)
    }
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

/// Response body for `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall service status, `"ok"` once the server is accepting requests.
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_response_wire_shape() {
        let e = ErrorResponse::new("Encrypted text was not supplied or was empty.");
        let json = serde_json::to_string(&e).unwrap();
        assert_eq!(
            json,
            r#"{"Error":true,"Message":"Encrypted text was not supplied or was empty."}"#
        );
    }

    #[test]
    fn file_encrypt_response_round_trip() {
        let plaintext = b"Here is the test file.\n";
        let envelope = vec![0xAB; 12 + plaintext.len() + 16];
        let resp = FileEncryptResponse::new(plaintext, &envelope);
        assert_eq!(resp.original_text, "Here is the test file.\n");
        assert_eq!(resp.original_text_length, plaintext.len() as u64);
        assert_eq!(resp.encrypted_text_length, envelope.len() as u64);
        assert_eq!(resp.envelope_bytes().unwrap(), envelope);
    }

    #[test]
    fn file_encrypt_response_field_names() {
        let resp = FileEncryptResponse::new(b"x", &[0u8; 29]);
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("\"OriginalText\""));
        assert!(json.contains("\"OriginalTextLength\""));
        assert!(json.contains("\"EncryptedTextLength\""));
        assert!(json.contains("\"EncryptedText\""));
    }

    #[test]
    fn health_response_serde() {
        let h = HealthResponse { status: "ok".into() };
        let json = serde_json::to_string(&h).unwrap();
        let decoded: HealthResponse = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded.status, "ok");
    }
}
