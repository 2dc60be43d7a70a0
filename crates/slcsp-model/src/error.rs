use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("rate area state is empty")]
    EmptyState,
    #[error("rate area number is empty")]
    EmptyRateArea,
    #[error("invalid rate: {0}")]
    InvalidRate(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
