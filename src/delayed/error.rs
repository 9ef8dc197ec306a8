//! Error types for the delayed square computation.

use thiserror::Error;

/// Errors that can occur when scheduling a delayed square.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SquareError {
    /// The input was negative. Raised synchronously, before any delay is
    /// scheduled; this is caller input validation, not a systemic fault.
    #[error("Negative input: {0}")]
    NegativeInput(f64),
}
