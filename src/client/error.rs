//! Error type for Github Client

use serde::Deserialize;
use std::{borrow::Cow, str};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors produced by this crate.
///
/// A request only ever fails with [`Error::Reqwest`]. Non-2xx statuses are not errors, they are
/// handed back as a [`Response`](crate::client::Response) for the caller to inspect.
#[derive(Error, Debug)]
pub enum Error {
    #[error("reqwest error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("utf8 error: {0}")]
    Utf8(#[from] str::Utf8Error),

    #[error("invalid base url: {0}")]
    Url(#[from] url::ParseError),

    #[error("invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("`{0}`")]
    Message(Cow<'static, str>),
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

// Github Error Responses
// https://docs.github.com/rest/overview/resources-in-the-rest-api#client-errors
#[derive(Debug, Deserialize)]
pub struct GithubClientError {
    pub message: Option<String>,
    pub errors: Option<Vec<GithubClientErrorType>>,
    pub documentation_url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum GithubClientErrorType {
    Message(String),
    Code {
        resource: String,
        field: String,
        code: String,
    },
}

#[cfg(test)]
mod test {
    use super::{Error, GithubClientError, GithubClientErrorType};

    #[test]
    fn message_conversions() {
        let e: Error = "missing token".into();
        assert_eq!(e.to_string(), "`missing token`");

        let e: Error = format!("bad {}", "value").into();
        assert_eq!(e.to_string(), "`bad value`");
    }

    #[test]
    fn client_error_payload() {
        let payload = r#"{
            "message": "Validation Failed",
            "errors": [
                { "resource": "Issue", "field": "title", "code": "missing_field" },
                "free form"
            ],
            "documentation_url": "https://docs.github.com/rest/issues/issues#create-an-issue"
        }"#;

        let error: GithubClientError = serde_json::from_str(payload).unwrap();
        assert_eq!(error.message.as_deref(), Some("Validation Failed"));

        let errors = error.errors.unwrap();
        assert_eq!(errors.len(), 2);
        match &errors[0] {
            GithubClientErrorType::Code {
                resource,
                field,
                code,
            } => {
                assert_eq!(resource, "Issue");
                assert_eq!(field, "title");
                assert_eq!(code, "missing_field");
            }
            other => panic!("unexpected error entry: {:?}", other),
        }
        assert!(matches!(&errors[1], GithubClientErrorType::Message(m) if m == "free form"));
    }
}
