pub mod constants;
pub mod error;
pub mod scan;
pub mod units;

pub use constants::DISTANCE_MAX_METERS;
pub use error::UnitError;
pub use scan::{Measurement, Scan};
pub use units::{AngularUnit, LinearUnit};
