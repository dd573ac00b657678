use lds_data::UnitError;
use std::fmt;
use std::io;
use thiserror::Error;

/// Field of a scan record, as named in validation errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Angle,
    Distance,
    Intensity,
    ErrorCode,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Field::Angle => write!(f, "angle"),
            Field::Distance => write!(f, "distance"),
            Field::Intensity => write!(f, "intensity"),
            Field::ErrorCode => write!(f, "error code"),
        }
    }
}

#[derive(Debug, Error)]
pub enum LdsError {
    #[error(transparent)]
    InvalidUnit(#[from] UnitError),
    #[error("{0} could not be parsed.")]
    MalformedRecord(String),
    #[error("{value} is an invalid {field}.")]
    InvalidValue { field: Field, value: f64 },
    #[error("{angle} was not an increase from the previous angle of {previous}.")]
    OutOfOrder { angle: f64, previous: f64 },
    #[error(transparent)]
    IoError(#[from] io::Error),
}
