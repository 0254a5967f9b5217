use crate::client::{GithubClientError, Rate, Result};
use bytes::Bytes;
use log::trace;
use reqwest::{header::HeaderMap, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// A response from the GitHub API, whatever its status.
///
/// The body is read in full before the response is handed back, so inspecting it never touches
/// the network again.
#[derive(Clone, Debug)]
pub struct Response {
    status: StatusCode,
    headers: HeaderMap,
    body: Bytes,
}

impl Response {
    pub(crate) fn new(status: StatusCode, headers: HeaderMap, body: Bytes) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    pub(crate) async fn from_reqwest(response: reqwest::Response) -> Result<Self> {
        let status = response.status();
        let headers = response.headers().clone();
        let body = response.bytes().await?;

        trace!("Github Response: {} ({} bytes)", status, body.len());

        Ok(Self::new(status, headers, body))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn into_body(self) -> Bytes {
        self.body
    }

    pub fn text(&self) -> Result<&str> {
        Ok(std::str::from_utf8(&self.body)?)
    }

    /// Deserialize the body into `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// The body as JSON, if there is one and it parses.
    pub fn value(&self) -> Option<Value> {
        if self.body.is_empty() {
            return None;
        }

        serde_json::from_slice(&self.body).ok()
    }

    /// Rate limit information reported with this response
    pub fn rate(&self) -> Rate {
        Rate::from_headers(&self.headers)
    }

    /// GitHub's error payload, for responses that failed with one.
    pub fn client_error(&self) -> Option<GithubClientError> {
        if self.is_success() {
            return None;
        }

        serde_json::from_slice(&self.body).ok()
    }
}

#[cfg(test)]
mod test {
    use super::Response;
    use bytes::Bytes;
    use reqwest::{header::HeaderMap, StatusCode};
    use serde::Deserialize;

    fn response(status: StatusCode, body: &'static str) -> Response {
        Response::new(status, HeaderMap::new(), Bytes::from_static(body.as_bytes()))
    }

    #[test]
    fn not_found_is_inspectable() {
        let r = response(
            StatusCode::NOT_FOUND,
            r#"{"message":"Not Found","documentation_url":"https://docs.github.com/rest"}"#,
        );

        assert!(!r.is_success());
        assert_eq!(r.status(), StatusCode::NOT_FOUND);
        assert_eq!(r.value().unwrap()["message"], "Not Found");

        let error = r.client_error().unwrap();
        assert_eq!(error.message.as_deref(), Some("Not Found"));
        assert!(error.errors.is_none());
    }

    #[test]
    fn empty_body() {
        let r = response(StatusCode::NO_CONTENT, "");

        assert!(r.is_success());
        assert!(r.value().is_none());
        assert!(r.client_error().is_none());
        assert_eq!(r.text().unwrap(), "");
    }

    #[test]
    fn typed_body() {
        #[derive(Debug, Deserialize)]
        struct Issue {
            number: u64,
            title: String,
        }

        let r = response(StatusCode::OK, r#"{"number":5,"title":"Broken","state":"open"}"#);
        let issue: Issue = r.json().unwrap();
        assert_eq!(issue.number, 5);
        assert_eq!(issue.title, "Broken");

        assert!(r.json::<Vec<u64>>().is_err());
    }

    #[test]
    fn non_json_body() {
        let r = response(StatusCode::OK, "Design for failure.");

        assert!(r.value().is_none());
        assert_eq!(r.text().unwrap(), "Design for failure.");
        assert_eq!(r.into_body(), Bytes::from_static(b"Design for failure."));
    }
}
