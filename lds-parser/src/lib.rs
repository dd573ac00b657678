mod constants;
mod error;
mod parser;
mod record;

pub use crate::constants::{END_TOKEN, START_TOKEN};
pub use crate::error::{Field, LdsError};
pub use crate::parser::ScanParser;
