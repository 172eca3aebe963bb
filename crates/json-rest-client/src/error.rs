//! HTTP error types

use thiserror::Error;

use crate::response::JsonKind;

/// Coarse classification of an [`HttpError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The request could not be built, sent or read
    Transport,
    /// The body was not valid JSON, or not of the expected shape
    Decode,
    /// The response carried no body
    EmptyResponse,
}

/// HTTP errors that can occur during requests
#[derive(Debug, Error)]
pub enum HttpError {
    /// Malformed request URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// Any other failure while sending the request or reading the response
    #[error("Transport error: {0}")]
    Transport(String),
    /// Proxy error
    #[error("Proxy error: {0}")]
    Proxy(String),
    /// Client build error
    #[error("Client build error: {0}")]
    Build(String),
    /// Response body is not valid JSON
    #[error("Decode error: {0}")]
    Decode(String),
    /// Request body could not be encoded as JSON
    #[error("Encode error: {0}")]
    Encode(String),
    /// Response body decoded to a different JSON shape than requested
    #[error("Unexpected JSON shape: expected {expected}, found {found}")]
    UnexpectedShape {
        /// Shape the caller asked for
        expected: JsonKind,
        /// Shape the server returned
        found: JsonKind,
    },
    /// Response has no body
    #[error("Empty response body")]
    EmptyResponse,
}

impl HttpError {
    /// Classify the error
    pub fn kind(&self) -> ErrorKind {
        match self {
            HttpError::InvalidUrl(_)
            | HttpError::Connection(_)
            | HttpError::Timeout
            | HttpError::Transport(_)
            | HttpError::Proxy(_)
            | HttpError::Build(_) => ErrorKind::Transport,
            HttpError::Decode(_) | HttpError::Encode(_) | HttpError::UnexpectedShape { .. } => {
                ErrorKind::Decode
            }
            HttpError::EmptyResponse => ErrorKind::EmptyResponse,
        }
    }
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else if err.is_connect() {
            HttpError::Connection(err.to_string())
        } else if err.is_builder() {
            HttpError::Build(err.to_string())
        } else {
            HttpError::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for HttpError {
    fn from(err: url::ParseError) -> Self {
        HttpError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for HttpError {
    fn from(err: serde_json::Error) -> Self {
        HttpError::Decode(err.to_string())
    }
}
