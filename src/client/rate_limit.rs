use crate::client::{
    Client, Params, Response, Result, HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET,
    HEADER_RATE_USED,
};
use chrono::{offset::LocalResult, TimeZone, Utc};

/// Rate limit state as reported by the `X-RateLimit-*` headers of a response.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rate {
    pub limit: usize,
    pub remaining: usize,
    pub used: usize,
    /// UTC epoch seconds at which the window resets
    pub reset: i64,
}

impl Rate {
    pub(super) fn from_headers(headers: &reqwest::header::HeaderMap) -> Self {
        let mut rate = Self::default();

        if let Some(limit) = headers
            .get(HEADER_RATE_LIMIT)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok())
        {
            rate.limit = limit;
        };

        if let Some(remaining) = headers
            .get(HEADER_RATE_REMAINING)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok())
        {
            rate.remaining = remaining;
        };

        if let Some(used) = headers
            .get(HEADER_RATE_USED)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok())
        {
            rate.used = used;
        };

        if let Some(reset) = headers
            .get(HEADER_RATE_RESET)
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.parse().ok())
        {
            rate.reset = reset;
        };

        rate
    }

    /// The reset time, if the response carried one.
    pub fn reset_at(&self) -> Option<chrono::DateTime<Utc>> {
        if self.reset == 0 {
            return None;
        }

        match Utc.timestamp_opt(self.reset, 0) {
            LocalResult::Single(datetime) => Some(datetime),
            _ => None,
        }
    }
}

/// `RateLimitClient` handles communication with the rate_limit related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/rate-limit
#[derive(Clone, Debug)]
pub struct RateLimitClient {
    inner: Client,
}

impl RateLimitClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Query this clients current rate limit status
    /// Note: Accessing this endpoint does not count against your REST API rate limit.
    ///
    /// GitHub API docs: https://docs.github.com/rest/rate-limit/rate-limit#get-rate-limit-status-for-the-authenticated-user
    pub async fn get(&self) -> Result<Response> {
        self.inner
            .get("/rate_limit", Params::new(), Params::new())
            .await
    }
}

#[cfg(test)]
mod test {
    use super::{Rate, HEADER_RATE_LIMIT, HEADER_RATE_REMAINING, HEADER_RATE_RESET};
    use crate::client::HEADER_RATE_USED;
    use reqwest::header::HeaderMap;

    #[test]
    fn rate() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_RATE_LIMIT, "60".parse().unwrap());
        headers.insert(HEADER_RATE_REMAINING, "56".parse().unwrap());
        headers.insert(HEADER_RATE_USED, "4".parse().unwrap());
        headers.insert(HEADER_RATE_RESET, "1372700873".parse().unwrap());

        let r = Rate::from_headers(&headers);
        assert_eq!(r.limit, 60);
        assert_eq!(r.remaining, 56);
        assert_eq!(r.used, 4);
        assert_eq!(r.reset, 1372700873);
        assert_eq!(r.reset_at().unwrap().timestamp(), 1372700873);
    }

    #[test]
    fn missing_or_garbage_headers() {
        let mut headers = HeaderMap::new();
        headers.insert(HEADER_RATE_LIMIT, "lots".parse().unwrap());

        let r = Rate::from_headers(&headers);
        assert_eq!(r, Rate::default());
        assert!(r.reset_at().is_none());
    }
}
