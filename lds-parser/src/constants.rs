/// Line marker that opens a scan block in the log.
pub const START_TOKEN: &str = "AngleInDegrees";
/// Line marker that closes a scan block in the log.
pub const END_TOKEN: &str = "ROTATION_SPEED";
pub(crate) const RECORD_FIELD_SEPARATOR: char = ',';
pub(crate) const N_RECORD_FIELDS: usize = 4;
pub(crate) const ANGLE_MAX_DEGREES: f64 = 359.;
