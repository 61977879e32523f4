use shared::error::{Error, ErrorCode};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Malformed row at line {line}: expected 2 fields, found {fields}")]
    MalformedRow { line: u64, fields: usize },
}

impl From<StoreError> for Error {
    fn from(err: StoreError) -> Self {
        Error::with_details(ErrorCode::SystemError, "Vote store unavailable", err.to_string())
    }
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
