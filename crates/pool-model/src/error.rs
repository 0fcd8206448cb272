use std::error::Error;
use std::fmt;

/// Errors raised while decoding contract-read results.
#[derive(Debug)]
pub enum ModelError {
    /// A numeric field was not an unsigned decimal string.
    InvalidNumber { field: &'static str },
    /// The pool-details payload was not valid JSON.
    InvalidDetails(serde_json::Error),
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidNumber { field } => {
                write!(f, "field `{field}` is not an unsigned decimal number")
            }
            ModelError::InvalidDetails(err) => write!(f, "pool details are not valid JSON: {err}"),
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ModelError::InvalidDetails(err) => Some(err),
            ModelError::InvalidNumber { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(err: serde_json::Error) -> Self {
        ModelError::InvalidDetails(err)
    }
}
