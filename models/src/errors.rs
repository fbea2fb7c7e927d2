// models/src/errors.rs

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("invalid entity id: {0}")]
    InvalidEntityId(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("unknown prescription status: {0}")]
    UnknownStatus(String),
    #[error("invalid date value: {0}")]
    InvalidDate(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
