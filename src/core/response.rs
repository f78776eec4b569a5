//! Response wrapper and content-type aware decoding.

use crate::error::{Error, Result};
use reqwest::header::{HeaderMap, CONTENT_TYPE};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use url::Url;


/// Highest status code treated as success.
pub const MAX_SUCCESS_STATUS: u16 = 299;

/// Name used in API error messages.
pub const SERVICE_NAME: &str = "balldontlie";

/// Content-type prefix required for JSON bodies. The trailing `;` is
/// intentional: a bare `application/json` is not accepted.
pub const JSON_CONTENT_TYPE: &str = "application/json;";

pub const TEXT_CONTENT_TYPE: &str = "text/plain;";

/// Status, headers and final URL of a response, without its body.
#[derive(Debug, Clone)]
pub struct ResponseParts {
    status: StatusCode,
    headers: HeaderMap,
    url: Url,
}

impl ResponseParts {
    pub fn new(status: StatusCode, headers: HeaderMap, url: Url) -> Self {
        Self {
            status,
            headers,
            url,
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// `Content-Type` header value, or an empty string when missing or not
    /// valid text.
    pub fn content_type(&self) -> &str {
        self.headers
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }

    /// Status line in the form `404 Not Found`.
    pub fn status_line(&self) -> String {
        match self.status.canonical_reason() {
            Some(reason) => format!("{} {}", self.status.as_u16(), reason),
            None => self.status.as_u16().to_string(),
        }
    }
}

impl From<&reqwest::Response> for ResponseParts {
    fn from(response: &reqwest::Response) -> Self {
        Self::new(
            response.status(),
            response.headers().clone(),
            response.url().clone(),
        )
    }
}

/// Decoded payload paired with the response it came from.
#[derive(Debug, Clone)]
pub struct Response<T> {
    parts: ResponseParts,
    data: T,
}

impl<T> Response<T> {
    pub fn new(parts: ResponseParts, data: T) -> Self {
        Self { parts, data }
    }

    pub fn status(&self) -> StatusCode {
        self.parts.status
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    pub fn url(&self) -> &Url {
        &self.parts.url
    }

    pub fn parts(&self) -> &ResponseParts {
        &self.parts
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn into_parts(self) -> (ResponseParts, T) {
        (self.parts, self.data)
    }
}

/// Decode a fully-read response body into `T`.
///
/// Status codes above [`MAX_SUCCESS_STATUS`] become [`Error::Api`]. Successful
/// responses must carry a JSON content type; the body is then decoded
/// strictly into `T`.
pub fn decode<T: DeserializeOwned>(parts: ResponseParts, body: &[u8]) -> Result<Response<T>> {
    if parts.status.as_u16() > MAX_SUCCESS_STATUS {
        return Err(classify_error(parts, body));
    }

    if !parts.content_type().starts_with(JSON_CONTENT_TYPE) {
        return Err(Error::UnexpectedContentType {
            content_type: parts.content_type().to_string(),
            response: Box::new(parts),
        });
    }

    match serde_json::from_slice(body) {
        Ok(data) => Ok(Response::new(parts, data)),
        Err(source) => Err(Error::Decode {
            source,
            response: Box::new(parts),
        }),
    }
}

fn classify_error(parts: ResponseParts, body: &[u8]) -> Error {
    let mut message = format!("{} returned from {}", parts.status_line(), SERVICE_NAME);
    let content_type = parts.content_type();
    let mut json = None;

    if content_type.starts_with(JSON_CONTENT_TYPE) {
        match serde_json::from_slice::<serde_json::Value>(body) {
            Ok(value) => json = Some(value),
            Err(source) => {
                return Error::Decode {
                    source,
                    response: Box::new(parts),
                }
            }
        }
    } else if content_type.starts_with(TEXT_CONTENT_TYPE) {
        message.push_str(": ");
        message.push_str(&String::from_utf8_lossy(body));
    } else {
        message.push_str(&format!(
            ": Response with unexpected Content-Type - {content_type} received"
        ));
    }

    Error::Api {
        message,
        body: json,
        response: Box::new(parts),
    }
}
