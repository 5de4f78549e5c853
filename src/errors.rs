use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;
use std::error::Error as StdError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Missing prompt")]
    MissingPrompt,

    #[error("{0}")]
    InvalidBody(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Downstream(String),
}

impl RelayError {
    /// Wraps a failed outbound call, keeping the whole cause chain in the message.
    pub fn downstream(err: reqwest::Error) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        RelayError::Downstream(message)
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingPrompt | RelayError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            RelayError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            RelayError::Downstream(_) => StatusCode::BAD_GATEWAY,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "detail": self.to_string()
        }))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{key} must be {expected}, got {value:?}")]
    Invalid {
        key: &'static str,
        expected: &'static str,
        value: String,
    },
}
