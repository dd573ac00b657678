use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum UnitError {
    #[error("{0} is not an available unit.")]
    InvalidUnit(String),
}
