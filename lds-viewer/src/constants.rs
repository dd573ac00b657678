/// Padding around the extent of all scans, in meters.
pub const AXIS_MARGIN: f64 = 0.1;
pub const WINDOW_SIZE: u32 = 800;
pub const FPS: u64 = 60;
pub const POINT_SIZE: u32 = 2;
