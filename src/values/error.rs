//! Error types for the scalar-value boundary.

use thiserror::Error;

/// Errors that can occur when admitting an untyped value into the
/// [`ScalarValue`](super::ScalarValue) domain.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValueError {
    /// The value was neither text nor numeric.
    #[error("Type mismatch: expected text or number, found {found}")]
    TypeMismatch {
        /// The JSON type name of the rejected value (e.g. `"boolean"`).
        found: &'static str,
    },
}
