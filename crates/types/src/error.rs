//! Error types for the SQL type layer

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    // Type lookup errors
    #[error("Type not supported: {0}")]
    TypeNotSupported(String),

    // Row validation errors
    #[error("value at {index} has unexpected type: {found}")]
    UnexpectedType { index: usize, found: String },

    #[error("expected {expected} values in row, got {got}")]
    UnexpectedRowLength { expected: usize, got: usize },

    // Conversion errors
    #[error("value {0:?} can't be converted to a timestamp")]
    ConvertingToTime(String),

    #[error("value not nil: {0}")]
    ValueNotNil(String),

    #[error("value of type {0} is not a tuple")]
    NotTuple(String),

    #[error("tuple should contain {expected} column(s), but has {got}")]
    InvalidColumnNumber { expected: usize, got: usize },

    #[error("value of type {0} is not an array")]
    NotArray(String),

    #[error("incompatible conversion to SQL type: {0}")]
    ConvertToSql(String),

    #[error("Invalid type: {0}")]
    InvalidType(String),

    #[error("value {value} is out of range for {target}")]
    OutOfRange { value: String, target: String },

    #[error("unable to cast {0} to bool")]
    NotBoolean(String),

    // Encoding errors
    #[error("{0} values can't be encoded for the wire")]
    NotEncodable(String),

    // Collaborator errors
    #[error("Generator error: {0}")]
    Generator(String),

    #[error("JSON error: {0}")]
    Json(String),
}

impl From<strata_value::Error> for Error {
    fn from(err: strata_value::Error) -> Self {
        match err {
            strata_value::Error::Generator(msg) => Error::Generator(msg),
            strata_value::Error::Json(msg) => Error::Json(msg),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}
