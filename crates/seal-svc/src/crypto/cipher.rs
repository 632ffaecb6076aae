//! AES-GCM seal and open over the `nonce ‖ ciphertext ‖ tag` envelope.
//!
//! **Nonce discipline:** a fresh 96-bit nonce is drawn from the OS CSPRNG on
//! every seal call and prepended to the output. A `(key, nonce)` pair must
//! never encrypt two different plaintexts — GCM nonce reuse breaks both
//! confidentiality and authentication. The context therefore stores no nonce
//! at all.

use aes_gcm::{
    aead::{
        consts::U12,
        rand_core::{OsRng, RngCore},
        Aead, KeyInit,
    },
    aes::Aes192,
    Aes128Gcm, Aes256Gcm, AesGcm, Nonce,
};
use thiserror::Error;

/// Byte length of an AES-GCM nonce (12 bytes = 96 bits).
pub const NONCE_LEN: usize = 12;

/// Byte length of the GCM authentication tag.
pub const TAG_LEN: usize = 16;

/// Smallest well-formed envelope: a nonce plus the tag over an empty payload.
pub const MIN_ENVELOPE_LEN: usize = NONCE_LEN + TAG_LEN;

type Aes192Gcm = AesGcm<Aes192, U12>;

/// Errors produced by the cipher layer.
#[derive(Debug, Error)]
pub enum CipherError {
    /// The key has a length AES does not accept.
    #[error("invalid key length: got {0} bytes, expected 16, 24, or 32")]
    InvalidKeyLength(usize),

    /// The GCM engine could not be constructed (unreachable for valid keys).
    #[error("could not construct the GCM mode")]
    ModeConstruction,

    /// The OS secure random source failed or is unavailable.
    #[error("secure random source unavailable")]
    RandomSource,

    /// The envelope is too short to contain a nonce and a tag.
    #[error("envelope too short: got {0} bytes, need at least {MIN_ENVELOPE_LEN}")]
    MalformedInput(usize),

    /// The authentication tag did not verify: corrupted ciphertext, wrong
    /// key, or tampering — deliberately not distinguished further.
    #[error("message authentication failed")]
    AuthenticationFailed,
}

/// AES-GCM engine at one of the three AES security levels, selected by key
/// length at construction time.
enum Engine {
    Aes128(Aes128Gcm),
    Aes192(Aes192Gcm),
    Aes256(Aes256Gcm),
}

impl Engine {
    fn encrypt(&self, nonce: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        let nonce = Nonce::from_slice(nonce);
        match self {
            Engine::Aes128(c) => c.encrypt(nonce, plaintext),
            Engine::Aes192(c) => c.encrypt(nonce, plaintext),
            Engine::Aes256(c) => c.encrypt(nonce, plaintext),
        }
        .map_err(|_| CipherError::ModeConstruction)
    }

    fn decrypt(&self, nonce: &[u8], payload: &[u8]) -> Result<Vec<u8>, CipherError> {
        let nonce = Nonce::from_slice(nonce);
        match self {
            Engine::Aes128(c) => c.decrypt(nonce, payload),
            Engine::Aes192(c) => c.decrypt(nonce, payload),
            Engine::Aes256(c) => c.decrypt(nonce, payload),
        }
        .map_err(|_| CipherError::AuthenticationFailed)
    }
}

/// An AES-GCM engine bound to one key for the lifetime of the process.
///
/// Constructed once at startup and shared read-only across request handlers;
/// [`seal`](CipherContext::seal) and [`open`](CipherContext::open) are
/// reentrant pure functions over their inputs.
pub struct CipherContext {
    engine: Engine,
}

impl CipherContext {
    /// Build a context from raw key bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::InvalidKeyLength`] unless the key is 16, 24,
    /// or 32 bytes, and [`CipherError::ModeConstruction`] on an internal
    /// engine construction failure.
    pub fn new(key: &[u8]) -> Result<Self, CipherError> {
        let engine = match key.len() {
            16 => Aes128Gcm::new_from_slice(key)
                .map(Engine::Aes128)
                .map_err(|_| CipherError::ModeConstruction)?,
            24 => Aes192Gcm::new_from_slice(key)
                .map(Engine::Aes192)
                .map_err(|_| CipherError::ModeConstruction)?,
            32 => Aes256Gcm::new_from_slice(key)
                .map(Engine::Aes256)
                .map_err(|_| CipherError::ModeConstruction)?,
            other => return Err(CipherError::InvalidKeyLength(other)),
        };
        Ok(Self { engine })
    }

    /// Seal `plaintext` into an envelope: `nonce ‖ ciphertext ‖ tag`.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::RandomSource`] if the OS CSPRNG fails while
    /// drawing the per-call nonce. Sealing itself cannot fail for a valid
    /// context.
    pub fn seal(&self, plaintext: &[u8]) -> Result<Vec<u8>, CipherError> {
        let mut nonce = [0u8; NONCE_LEN];
        OsRng
            .try_fill_bytes(&mut nonce)
            .map_err(|_| CipherError::RandomSource)?;

        let ciphertext = self.engine.encrypt(&nonce, plaintext)?;

        let mut envelope = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        envelope.extend_from_slice(&nonce);
        envelope.extend_from_slice(&ciphertext);
        Ok(envelope)
    }

    /// Open an envelope back into plaintext, verifying the tag.
    ///
    /// # Errors
    ///
    /// Returns [`CipherError::MalformedInput`] if `envelope` is shorter than
    /// [`MIN_ENVELOPE_LEN`], and [`CipherError::AuthenticationFailed`] if
    /// the tag does not verify.
    pub fn open(&self, envelope: &[u8]) -> Result<Vec<u8>, CipherError> {
        if envelope.len() < MIN_ENVELOPE_LEN {
            return Err(CipherError::MalformedInput(envelope.len()));
        }
        let (nonce, payload) = envelope.split_at(NONCE_LEN);
        self.engine.decrypt(nonce, payload)
    }
}

impl std::fmt::Debug for CipherContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print anything derived from the key.
        f.write_str("CipherContext([REDACTED])")
    }
}
