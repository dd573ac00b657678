/// Range limit of the Botvac LDS. Readings that reach it are stored as zero.
pub const DISTANCE_MAX_METERS: f64 = 5.;
