//! Unit tests for error handling

use super::*;
use reqwest::header::HeaderMap;
use url::Url;

fn parts(status: StatusCode) -> Box<ResponseParts> {
    Box::new(ResponseParts::new(
        status,
        HeaderMap::new(),
        Url::parse("https://www.balldontlie.io/api/v1/players/1").unwrap(),
    ))
}

#[cfg(test)]
mod error_tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_invalid_base_url_error() {
        let source = Url::parse("not a url").unwrap_err();
        let error = Error::InvalidBaseUrl(source);

        assert!(error.to_string().starts_with("Invalid base URL"));
        assert!(error.source().is_some());
        assert!(error.response().is_none());
    }

    #[test]
    fn test_config_error() {
        let error = Error::Config("base_url is required".to_string());
        assert_eq!(
            error.to_string(),
            "Configuration error: base_url is required"
        );
    }

    #[test]
    fn test_invalid_path_error_keeps_path() {
        let source = Url::parse("http://[::1").unwrap_err();
        let error = Error::InvalidPath {
            path: "http://[::1".to_string(),
            source,
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Invalid request path"));
        assert!(error_string.contains("http://[::1"));
        assert!(error.source().is_some());
        assert!(error.status().is_none());
    }

    #[test]
    fn test_api_error_message_is_verbatim() {
        let error = Error::Api {
            message: "404 Not Found returned from balldontlie: Not Found".to_string(),
            body: None,
            response: parts(StatusCode::NOT_FOUND),
        };

        assert_eq!(
            error.to_string(),
            "404 Not Found returned from balldontlie: Not Found"
        );
        assert_eq!(error.status(), Some(StatusCode::NOT_FOUND));
        assert!(error.is_not_found());
        assert!(!error.is_timeout());
        assert_eq!(
            error.response().unwrap().url().path(),
            "/api/v1/players/1"
        );
    }

    #[test]
    fn test_unexpected_content_type_error() {
        let error = Error::UnexpectedContentType {
            content_type: "text/html".to_string(),
            response: parts(StatusCode::OK),
        };

        assert_eq!(
            error.to_string(),
            "Response with unexpected Content-Type - text/html received"
        );
        assert_eq!(error.status(), Some(StatusCode::OK));
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_decode_error_source_chain() {
        let source = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = Error::Decode {
            source,
            response: parts(StatusCode::OK),
        };

        assert!(error.to_string().starts_with("JSON parsing failed"));
        let error_trait: &dyn std::error::Error = &error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_result_type_alias() {
        fn test_function() -> Result<u32> {
            Ok(5)
        }

        assert_eq!(test_function().unwrap(), 5);
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<u32> {
            Err(Error::Config("nope".to_string()))
        }

        match test_function().unwrap_err() {
            Error::Config(message) => assert_eq!(message, "nope"),
            other => panic!("Expected Config error, got {other:?}"),
        }
    }
}
