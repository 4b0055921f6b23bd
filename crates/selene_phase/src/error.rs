//! Error types for phase computation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from phase and frame-index computation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum PhaseError {
    /// Input was NaN or infinite.
    NonFinite {
        /// Which argument was non-finite.
        input: &'static str,
        /// The offending value.
        value: f64,
    },
    /// Phase name string did not match any of the eight names.
    UnknownName(String),
}

impl Display for PhaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFinite { input, value } => write!(f, "non-finite {input}: {value}"),
            Self::UnknownName(name) => write!(f, "unknown phase name: {name:?}"),
        }
    }
}

impl Error for PhaseError {}

/// Reject NaN and infinities.
pub(crate) fn require_finite(input: &'static str, value: f64) -> Result<f64, PhaseError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PhaseError::NonFinite { input, value })
    }
}
