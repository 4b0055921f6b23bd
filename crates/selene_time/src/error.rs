//! Error types for calendar parsing and clock access.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from UTC date construction, parsing, or reading the system clock.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Date/time string did not match any accepted layout.
    Parse(String),
    /// A calendar field is outside its valid range.
    InvalidField(&'static str),
    /// The system clock reported a time before the Unix epoch.
    Clock(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "date parse error: {msg}"),
            Self::InvalidField(field) => write!(f, "invalid {field}"),
            Self::Clock(msg) => write!(f, "system clock error: {msg}"),
        }
    }
}

impl Error for TimeError {}

impl From<std::time::SystemTimeError> for TimeError {
    fn from(e: std::time::SystemTimeError) -> Self {
        Self::Clock(e.to_string())
    }
}
