//! Unified error type for the convenience API.

use std::error::Error;
use std::fmt::{Display, Formatter};

use selene_assets::AssetError;
use selene_phase::PhaseError;
use selene_time::TimeError;

/// Errors from any selene crate.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SeleneError {
    /// Date parsing, validation or clock failure.
    Time(TimeError),
    /// Non-finite phase or Julian Day.
    Phase(PhaseError),
    /// Frame image could not be loaded.
    Asset(AssetError),
}

impl Display for SeleneError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Phase(e) => write!(f, "phase error: {e}"),
            Self::Asset(e) => write!(f, "asset error: {e}"),
        }
    }
}

impl Error for SeleneError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Phase(e) => Some(e),
            Self::Asset(e) => Some(e),
        }
    }
}

impl From<TimeError> for SeleneError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<PhaseError> for SeleneError {
    fn from(e: PhaseError) -> Self {
        Self::Phase(e)
    }
}

impl From<AssetError> for SeleneError {
    fn from(e: AssetError) -> Self {
        Self::Asset(e)
    }
}
