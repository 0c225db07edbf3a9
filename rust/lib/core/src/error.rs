use thiserror::Error;

// ── Error codes ─────────────────────────────────────────────────────
//
// Stable, machine-readable identifiers. Callers match on these,
// never on the human-readable message string.

/// Stable error code constants.
pub mod error_code {
    pub const NOT_FOUND: &str = "NOT_FOUND";
    pub const VALIDATION_FAILED: &str = "VALIDATION_FAILED";
    pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
    pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
    pub const CORRUPT_DATA: &str = "CORRUPT_DATA";
    pub const INTERNAL: &str = "INTERNAL";
}

// ── ServiceError ────────────────────────────────────────────────────

/// Unified error type for the store and the report workflow.
///
/// Each variant maps to a stable error code (see [`error_code`]).
#[derive(Error, Debug)]
pub enum ServiceError {
    /// A specifically requested record does not exist.
    #[error("{0}")]
    NotFound(String),

    /// A required field is missing or an edit is out of range.
    /// Nothing is persisted when this is returned.
    #[error("{0}")]
    Validation(String),

    /// The admin gate rejected the supplied passkey.
    #[error("{0}")]
    PermissionDenied(String),

    /// The storage backend is unavailable or failed mid-operation.
    #[error("persistence unavailable: {0}")]
    Storage(String),

    /// A persisted collection could not be decoded.
    #[error("corrupt data: {0}")]
    Corrupt(String),

    /// Unexpected internal error.
    #[error("{0}")]
    Internal(String),
}

impl ServiceError {
    /// Stable, machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::NotFound(_) => error_code::NOT_FOUND,
            ServiceError::Validation(_) => error_code::VALIDATION_FAILED,
            ServiceError::PermissionDenied(_) => error_code::PERMISSION_DENIED,
            ServiceError::Storage(_) => error_code::STORAGE_ERROR,
            ServiceError::Corrupt(_) => error_code::CORRUPT_DATA,
            ServiceError::Internal(_) => error_code::INTERNAL,
        }
    }
}
