use crate::client::{Client, Params, Response, Result};

/// `SearchClient` handles communication with the search related methods of the GitHub API.
///
/// GitHub API docs: https://docs.github.com/rest/search
#[derive(Clone, Debug)]
pub struct SearchClient {
    inner: Client,
}

impl SearchClient {
    pub fn new(token: &str) -> Result<Self> {
        Client::new(token).map(Self::from_client)
    }

    pub(crate) fn from_client(client: Client) -> Self {
        Self { inner: client }
    }

    /// Search code
    ///
    /// `params` needs at least `q`. Search has its own, much lower, rate limit.
    ///
    /// GitHub API docs: https://docs.github.com/rest/search/search#search-code
    pub async fn code(&self, params: Params) -> Result<Response> {
        self.inner.get("/search/code", params, Params::new()).await
    }

    /// Search commits
    ///
    /// GitHub API docs: https://docs.github.com/rest/search/search#search-commits
    pub async fn commits(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/search/commits", params, Params::new())
            .await
    }

    /// Search issues and pull requests
    ///
    /// GitHub API docs: https://docs.github.com/rest/search/search#search-issues-and-pull-requests
    pub async fn issues_and_pull_requests(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/search/issues", params, Params::new())
            .await
    }

    /// Search labels
    ///
    /// GitHub API docs: https://docs.github.com/rest/search/search#search-labels
    pub async fn labels(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/search/labels", params, Params::new())
            .await
    }

    /// Search repositories
    ///
    /// GitHub API docs: https://docs.github.com/rest/search/search#search-repositories
    pub async fn repos(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/search/repositories", params, Params::new())
            .await
    }

    /// Search topics
    ///
    /// GitHub API docs: https://docs.github.com/rest/search/search#search-topics
    pub async fn topics(&self, params: Params) -> Result<Response> {
        self.inner
            .get("/search/topics", params, Params::new())
            .await
    }

    /// Search users
    ///
    /// GitHub API docs: https://docs.github.com/rest/search/search#search-users
    pub async fn users(&self, params: Params) -> Result<Response> {
        self.inner.get("/search/users", params, Params::new()).await
    }
}
