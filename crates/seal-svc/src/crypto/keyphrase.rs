//! Keyphrase generation from the OS CSPRNG.

use aes_gcm::aead::rand_core::{OsRng, RngCore};

use super::cipher::CipherError;

/// Secret key bytes for the cipher context.
///
/// Generated once at startup, never persisted, logged, or transmitted. The
/// buffer is overwritten with zeroes on drop to shorten the window during
/// which plaintext key material lives in RAM.
pub struct Keyphrase(Vec<u8>);

impl Keyphrase {
    /// Borrow the raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl Drop for Keyphrase {
    fn drop(&mut self) {
        self.0.iter_mut().for_each(|b| *b = 0);
    }
}

impl std::fmt::Debug for Keyphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print key material — not even in debug builds.
        f.write_str("Keyphrase([REDACTED])")
    }
}

/// Fill `size` bytes from the OS CSPRNG.
///
/// # Errors
///
/// Returns [`CipherError::RandomSource`] if the secure random source is
/// unavailable — an unrecoverable startup condition for the caller, not a
/// request-time error.
pub fn generate(size: usize) -> Result<Keyphrase, CipherError> {
    let mut bytes = vec![0u8; size];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|_| CipherError::RandomSource)?;
    Ok(Keyphrase(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_requested_length() {
        for size in [16, 24, 32] {
            assert_eq!(generate(size).unwrap().as_bytes().len(), size);
        }
    }

    #[test]
    fn successive_keyphrases_differ() {
        let a = generate(32).unwrap();
        let b = generate(32).unwrap();
        assert_ne!(a.as_bytes(), b.as_bytes());
    }

    #[test]
    fn debug_is_redacted() {
        let key = generate(32).unwrap();
        assert_eq!(format!("{key:?}"), "Keyphrase([REDACTED])");
    }
}
