//! Error type shared by the sexagesimal parsers and the sky area pipeline.

use thiserror::Error;

/// Broad classification of a [`SkyAreaError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A unit name, separator, or bound count was rejected.
    InvalidArgument,
    /// A bound could not be read as a number or sexagesimal string.
    Parse,
    /// The computed area fraction falls outside the physical range [0, 1].
    Domain,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SkyAreaError {
    #[error("Invalid {which} unit '{value}': must be one of {valid}")]
    InvalidUnit {
        which: &'static str,
        value: String,
        valid: &'static str,
    },
    #[error("Invalid {axis} bounds: expected 1 or 2 values, got {count}")]
    BoundCount { axis: &'static str, count: usize },
    #[error("Separator must not be empty")]
    EmptySeparator,
    #[error("Invalid sexagesimal value '{value}': expected 3 fields separated by '{separator}'")]
    MissingFields { value: String, separator: String },
    #[error("Invalid number '{field}' in '{value}'")]
    InvalidNumber { field: String, value: String },
    #[error("Sexagesimal input requires text bounds, got number {0}")]
    NotSexagesimal(f64),
    #[error("Sky area is non-physical (negative): area fraction {0}")]
    NegativeArea(f64),
    #[error("Sky area is non-physical (bigger than the full sky): area fraction {0}")]
    ExceedsFullSky(f64),
    #[error("Sky area is non-physical (not a finite number)")]
    NotFinite,
}

impl SkyAreaError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SkyAreaError::InvalidUnit { .. }
            | SkyAreaError::BoundCount { .. }
            | SkyAreaError::EmptySeparator => ErrorKind::InvalidArgument,
            SkyAreaError::MissingFields { .. }
            | SkyAreaError::InvalidNumber { .. }
            | SkyAreaError::NotSexagesimal(_) => ErrorKind::Parse,
            SkyAreaError::NegativeArea(_)
            | SkyAreaError::ExceedsFullSky(_)
            | SkyAreaError::NotFinite => ErrorKind::Domain,
        }
    }
}
