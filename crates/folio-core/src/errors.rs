//! Cross-cutting error types for Folio.
//!
//! The read path never fails: malformed or missing content degrades to
//! defaults. These errors cover the few places where a caller hands the core
//! something it cannot interpret (an unknown kind name, a slug that cannot be
//! made URL-safe). Store errors live in `folio-store`.

use thiserror::Error;

/// Errors that can be raised by the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A content kind name did not match any known kind or collection.
    #[error("Unknown content kind: {0}")]
    UnknownKind(String),

    /// Data failed validation (slug format, record shape).
    #[error("Validation error: {0}")]
    Validation(String),
}
