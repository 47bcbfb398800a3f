use catalog::validation::FieldError;
use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: StatusCode, message: String },

    #[error("Unknown vlog {0}")]
    UnknownVlog(String),

    #[error("{}", catalog::validation::FIX_ERRORS_MESSAGE)]
    Invalid(Vec<FieldError>),
}
