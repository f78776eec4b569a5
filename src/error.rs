//! Error types for the balldontlie client

use crate::core::response::ResponseParts;
use reqwest::StatusCode;
use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// The configured base URL is not an absolute, parseable URL.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(#[source] url::ParseError),

    #[error("Configuration error: {0}")]
    Config(String),

    /// A request path could not be parsed. No network activity happened.
    ///
    /// The unmodified path is kept so callers can decide whether to proceed.
    #[error("Invalid request path {path:?}: {source}")]
    InvalidPath {
        path: String,
        #[source]
        source: url::ParseError,
    },

    /// DNS, connection or timeout failure before any response arrived.
    #[error("HTTP request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// Status and headers arrived but reading the body failed.
    #[error("Reading response body failed: {source}")]
    Body {
        #[source]
        source: reqwest::Error,
        response: Box<ResponseParts>,
    },

    /// The server answered with a status code above 299.
    #[error("{message}")]
    Api {
        message: String,
        /// Decoded body when the server answered with JSON.
        body: Option<serde_json::Value>,
        response: Box<ResponseParts>,
    },

    /// A successful status arrived with a non-JSON content type.
    #[error("Response with unexpected Content-Type - {content_type} received")]
    UnexpectedContentType {
        content_type: String,
        response: Box<ResponseParts>,
    },

    #[error("JSON parsing failed: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
        response: Box<ResponseParts>,
    },
}

impl Error {
    /// Transport-level details of the response that produced this error, if
    /// the request reached the server at all.
    pub fn response(&self) -> Option<&ResponseParts> {
        match self {
            Error::Api { response, .. }
            | Error::Body { response, .. }
            | Error::UnexpectedContentType { response, .. }
            | Error::Decode { response, .. } => Some(&**response),
            _ => None,
        }
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.response().map(ResponseParts::status)
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Transport(err) | Error::Body { source: err, .. } => err.is_timeout(),
            _ => false,
        }
    }
}
