//! Common response types and errors shared across `seal-svc` crates.

pub mod error;
pub mod protocol;

pub use error::ServiceError;
