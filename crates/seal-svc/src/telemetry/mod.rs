//! Logging setup: structured JSON logs via `tracing`.
//!
//! # Telemetry invariants
//!
//! - **No key material** must appear in any log field; request data is only
//!   logged as a truncated preview.
//! - Log level is configurable via `LOG_LEVEL` (default: `info`) or the
//!   standard `RUST_LOG` environment variable.

pub mod init;

pub use init::init_telemetry;
