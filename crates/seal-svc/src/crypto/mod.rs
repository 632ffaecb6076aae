//! AES-GCM encryption primitives.
//!
//! This module is intentionally free of HTTP dependencies. It provides the
//! keyphrase generator and the seal/open operations used by the handlers.
//!
//! # Envelope format
//!
//! ```text
//! nonce (12 bytes) ‖ ciphertext ‖ tag (16 bytes)
//! ```
//!
//! The nonce is freshly generated per seal call and prepended to the cipher
//! output, so the envelope is self-describing: open splits at the nonce-size
//! boundary and needs no state beyond the key.

pub mod cipher;
pub mod keyphrase;

pub use cipher::{CipherContext, CipherError, NONCE_LEN, TAG_LEN};
pub use keyphrase::Keyphrase;
