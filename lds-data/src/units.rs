use crate::error::UnitError;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit of a raw distance reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LinearUnit {
    /// Native unit of the LDS log.
    #[default]
    Millimeters,
    Meters,
}

/// Unit of a raw angle reading.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AngularUnit {
    /// Native unit of the LDS log.
    #[default]
    Degrees,
    Radians,
}

impl LinearUnit {
    pub fn to_meters(self, distance: f64) -> f64 {
        match self {
            LinearUnit::Millimeters => distance / 1000.,
            LinearUnit::Meters => distance,
        }
    }
}

impl AngularUnit {
    pub fn to_radians(self, angle: f64) -> f64 {
        match self {
            AngularUnit::Degrees => degree_to_radian(angle),
            AngularUnit::Radians => angle,
        }
    }
}

pub(crate) fn degree_to_radian(degree: f64) -> f64 {
    degree * std::f64::consts::PI / 180.
}

impl FromStr for LinearUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "millimeters" => Ok(LinearUnit::Millimeters),
            "meters" => Ok(LinearUnit::Meters),
            _ => Err(UnitError::InvalidUnit(s.to_string())),
        }
    }
}

impl FromStr for AngularUnit {
    type Err = UnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degrees" => Ok(AngularUnit::Degrees),
            "radians" => Ok(AngularUnit::Radians),
            _ => Err(UnitError::InvalidUnit(s.to_string())),
        }
    }
}

impl fmt::Display for LinearUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinearUnit::Millimeters => write!(f, "millimeters"),
            LinearUnit::Meters => write!(f, "meters"),
        }
    }
}

impl fmt::Display for AngularUnit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AngularUnit::Degrees => write!(f, "degrees"),
            AngularUnit::Radians => write!(f, "radians"),
        }
    }
}
