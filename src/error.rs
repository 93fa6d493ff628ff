//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while generating payroll,
//! batching payslips, and driving the approval pipeline.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// Every operation in the engine returns this error type. The four variants
/// form the engine's whole error taxonomy: invalid input, missing records,
/// illegal state transitions, and storage failures.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::not_found("payslip", "7b6e");
/// assert_eq!(error.to_string(), "payslip not found: 7b6e");
/// assert_eq!(error.code(), "NOT_FOUND");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Input was missing or invalid (empty remark on rejection, inverted
    /// period bounds, malformed attendance, and so on).
    #[error("Validation failed: {message}")]
    Validation {
        /// A description of what made the input invalid.
        message: String,
    },

    /// No record matched the given identifier or period.
    #[error("{entity} not found: {key}")]
    NotFound {
        /// The kind of record that was looked up (e.g. "payslip").
        entity: String,
        /// The identifier or period that matched nothing.
        key: String,
    },

    /// An illegal state transition, a gating violation, or a concurrent
    /// duplicate detected by a storage uniqueness constraint.
    #[error("Conflict: {message}")]
    Conflict {
        /// A description of the conflicting state.
        message: String,
    },

    /// The storage layer failed; any multi-row operation in flight was
    /// rolled back in full.
    #[error("Persistence failure: {message}")]
    Persistence {
        /// A description of the storage failure.
        message: String,
    },
}

impl EngineError {
    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Creates a not-found error for the given entity kind and lookup key.
    pub fn not_found(entity: impl Into<String>, key: impl ToString) -> Self {
        Self::NotFound {
            entity: entity.into(),
            key: key.to_string(),
        }
    }

    /// Creates a conflict error.
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Creates a persistence error.
    pub fn persistence(message: impl Into<String>) -> Self {
        Self::Persistence {
            message: message.into(),
        }
    }

    /// Returns a stable machine-readable code for the error kind.
    ///
    /// Thin API/CLI layers map these codes onto their own status vocabulary;
    /// the codes never change even when messages are reworded.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Conflict { .. } => "CONFLICT",
            Self::Persistence { .. } => "PERSISTENCE_ERROR",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
