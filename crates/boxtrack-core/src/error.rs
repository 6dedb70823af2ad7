//! # Error Types
//!
//! Domain-specific error types for boxtrack-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  boxtrack-core errors (this file)                                      │
//! │  ├── ValidationError  - Payload rejected before reaching the store     │
//! │  └── ErrorKind        - Classification every error maps onto           │
//! │                                                                         │
//! │  boxtrack-db errors (separate crate)                                   │
//! │  └── DbError          - Store failures, carries ValidationError too    │
//! │                                                                         │
//! │  Flow: ValidationError → DbError → ErrorKind → HTTP status             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending field in the message
//! 3. The boundary decides on transport; the core only classifies

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when a creation or update payload does not match the
/// accepted shape. They are always user-correctable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing, or blank after trimming.
    #[error("{field} is required")]
    Required { field: String },

    /// Field is present but has the wrong shape.
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A numeric field could not be coerced.
    ///
    /// ## When This Occurs
    /// - `quantity: "three"` (not numeric)
    /// - `quantity: 2.5` (not integral)
    /// - `value: "NaN"` (not finite)
    #[error("{field} must be {expected}, got '{got}'")]
    InvalidNumber {
        field: String,
        expected: String,
        got: String,
    },

    /// The payload could not be read at all (bad JSON, wrong types).
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),
}

impl ValidationError {
    /// Creates a Required error for a field.
    pub fn required(field: impl Into<String>) -> Self {
        ValidationError::Required {
            field: field.into(),
        }
    }
}

// =============================================================================
// Error Kind
// =============================================================================

/// Classification of every error the store can produce.
///
/// ## Boundary Mapping
/// ```text
/// Validation            → 400  (user-correctable)
/// NotFound              → 404  (terminal, not retried)
/// ReferentialIntegrity  → 400  (child names a missing parent)
/// Conflict              → 409  (unique constraint, e.g. username)
/// Storage               → 500  (generic failure, not differentiated)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    ReferentialIntegrity,
    Conflict,
    Storage,
}

impl ErrorKind {
    /// HTTP status a REST boundary should answer with.
    pub const fn response_status(self) -> u16 {
        match self {
            ErrorKind::Validation | ErrorKind::ReferentialIntegrity => 400,
            ErrorKind::NotFound => 404,
            ErrorKind::Conflict => 409,
            ErrorKind::Storage => 500,
        }
    }

    /// Whether the caller can fix the request and try again.
    pub const fn is_client_error(self) -> bool {
        !matches!(self, ErrorKind::Storage)
    }
}

impl From<&ValidationError> for ErrorKind {
    fn from(_: &ValidationError) -> Self {
        ErrorKind::Validation
    }
}

/// Convenience type alias for validation results.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================
