pub mod constants;
pub mod error;
pub mod render;
pub mod viewer;

pub use crate::error::ViewerError;
pub use crate::viewer::{AxisBounds, FrameCommand, ScanViewer};
