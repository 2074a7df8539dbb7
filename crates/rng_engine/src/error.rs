//! Error types for the random-number engine.
//!
//! Every fallible engine operation returns [`RngError`]. Failed `reseed` and
//! `jump` calls never leave a generator half-updated: the error is raised
//! before any state is touched.

use thiserror::Error;

use crate::kind::GeneratorKind;

/// Categorised engine errors.
///
/// # Examples
/// ```
/// use rng_engine::{GeneratorKind, RngError};
///
/// let err = RngError::UnsupportedOperation {
///     operation: "jump",
///     kind: GeneratorKind::SmallLcg32,
/// };
/// assert_eq!(
///     err.to_string(),
///     "Operation 'jump' is not supported by small-lcg32 generators"
/// );
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RngError {
    /// Generator kind name not recognised.
    #[error("Unknown generator kind: {0}")]
    UnknownKind(String),

    /// Distribution parameter outside its valid domain.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// Distribution parameters belong to a different family than the kind.
    #[error("Parameters for {params} cannot configure a {kind} generator")]
    ParameterMismatch {
        /// Kind the caller asked for.
        kind: GeneratorKind,
        /// Kind the supplied parameters belong to.
        params: GeneratorKind,
    },

    /// Operation not defined for this generator kind.
    #[error("Operation '{operation}' is not supported by {kind} generators")]
    UnsupportedOperation {
        /// Operation name.
        operation: &'static str,
        /// Kind of the generator the operation was attempted on.
        kind: GeneratorKind,
    },

    /// Byte fill requested into a zero-length buffer.
    #[error("Cannot fill an empty buffer")]
    EmptyBuffer,

    /// Analysis requested over zero samples.
    #[error("Sample size must be at least 1")]
    EmptySample,
}

/// Result alias for engine operations.
pub type Result<T> = std::result::Result<T, RngError>;
