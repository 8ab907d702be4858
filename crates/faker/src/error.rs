//! Faker server error types.

use rmcp::ErrorData;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("failed to encode records: {0}")]
    Encode(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for ErrorData {
    fn from(err: Error) -> Self {
        match err {
            Error::InvalidArguments(_) | Error::UnknownTool(_) => {
                ErrorData::invalid_params(err.to_string(), None)
            }
            Error::Encode(_) => ErrorData::internal_error(err.to_string(), None),
        }
    }
}
