//! Shared application state injected into every Axum handler.

use std::sync::Arc;

use crate::crypto::CipherContext;

/// Application state shared across all request handlers.
///
/// The cipher context is constructed once at startup and immutable after
/// construction; handlers receive it by explicit injection rather than via a
/// module-level singleton, which keeps tests isolated and concurrent sharing
/// safe by construction.
#[derive(Clone, Debug)]
pub struct AppState {
    /// The process-lifetime AES-GCM context.
    pub cipher: Arc<CipherContext>,
}

impl AppState {
    /// Create a new [`AppState`] owning the provided cipher context.
    pub fn new(cipher: CipherContext) -> Self {
        Self {
            cipher: Arc::new(cipher),
        }
    }
}
