use lds_parser::LdsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("No scans to display.")]
    NoScans,
    #[error("Failed to open the viewer window: {0}")]
    Window(String),
    #[error(transparent)]
    Lds(#[from] LdsError),
}
