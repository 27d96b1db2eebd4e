//! Structured error types for live-scope
//!
//! Using thiserror for automatic Display implementation and error chaining.

use thiserror::Error;

/// Errors surfaced by the capture event pipeline.
///
/// Ingestion handlers themselves never fail (malformed or duplicate events
/// resolve last-writer-wins); this type exists for backends that use the
/// fallible `try_emit` path to learn when the session is gone.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SinkError {
    #[error("capture session closed, event dropped")]
    SessionClosed,
}
