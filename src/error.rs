//! Error types for lacore
//!
//! Only *numerical* failures and backend faults are surfaced as [`Error`]
//! values. Precondition violations (shape mismatches, invalid flag
//! combinations, out-of-bounds views) are caller defects and are asserted,
//! never returned.

use thiserror::Error;

/// Result type alias using lacore's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in lacore operations
#[derive(Error, Debug)]
pub enum Error {
    /// Cholesky decomposition failed
    ///
    /// Carries the status code of the underlying factorization: the
    /// one-based index of the first pivot that was not positive. Raised
    /// when the `Fail` strategy is selected, or when `AdjustDiagonal`
    /// exhausts its loading range.
    #[error("Cholesky decomposition failed with status {info}")]
    Cholesky {
        /// One-based index of the first non-positive pivot
        info: i32,
    },

    /// Cholesky rank-1 downdate failed
    ///
    /// The downdated matrix would not be positive definite. The factor's
    /// contents are left unspecified; it must be re-decomposed before reuse.
    #[error("Cholesky downdate failed with status {info}: result not positive definite")]
    Downdate {
        /// Status code of the underlying downdate routine
        info: i32,
    },

    /// Out of memory
    #[error("Out of memory: failed to allocate {size} bytes")]
    OutOfMemory {
        /// Requested size in bytes
        size: usize,
    },

    /// Data length does not match the requested shape
    #[error("Shape mismatch: expected {expected} elements, got {got}")]
    ShapeMismatch {
        /// Element count implied by the shape
        expected: usize,
        /// Element count actually provided
        got: usize,
    },

    /// Backend-specific error
    #[error("Backend error: {0}")]
    Backend(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let e = Error::Cholesky { info: 3 };
        assert!(e.to_string().contains("status 3"));

        let e = Error::Downdate { info: 1 };
        assert!(e.to_string().contains("not positive definite"));
    }
}
